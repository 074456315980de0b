use dioxus::prelude::*;

use crate::shared::types::StationDto;
use crate::utils::format::{format_local, format_power_kw, status_badge_class};

#[allow(non_snake_case)]
#[component]
pub fn StationList(stations: Vec<StationDto>, on_delete: EventHandler<i64>) -> Element {
    if stations.is_empty() {
        return rsx! {
            p { class: "text-sm text-slate-400", "No stations to show." }
        };
    }

    rsx! {
        ul { class: "space-y-3",
            for station in stations.iter() {
                StationRow { key: "{station.id}", station: station.clone(), on_delete }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StationRow(station: StationDto, on_delete: EventHandler<i64>) -> Element {
    let id = station.id;
    let badge = status_badge_class(station.is_available());
    let power = format_power_kw(station.power_kw);

    rsx! {
        li { class: "group flex items-center justify-between gap-4 rounded-xl border border-slate-800 bg-slate-950/40 p-4",
            div { class: "space-y-1",
                p { class: "text-lg font-medium text-slate-100", "{station.name}" }
                p { class: "text-sm text-slate-400", "{station.location}" }
                if let Some(created) = &station.created_at {
                    time { class: "text-xs text-slate-500", datetime: "{created}", "Added {format_local(created)}" }
                }
            }
            div { class: "flex items-center gap-4",
                div { class: "text-right space-y-1",
                    span { class: "inline-block rounded-full px-3 py-1 text-sm font-medium ring-1 {badge}", "{station.status}" }
                    p { class: "text-xs text-slate-400 tabular-nums", "{power}" }
                }
                button {
                    class: "rounded-full bg-red-500/15 px-3 py-1 text-xs font-bold text-red-300 opacity-0 transition-opacity group-hover:opacity-100 hover:bg-red-500/25",
                    onclick: move |_| on_delete.call(id),
                    "DELETE"
                }
            }
        }
    }
}
