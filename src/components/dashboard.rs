use dioxus::prelude::*;

use dioxus::logger::tracing::info;

use crate::api::HttpChargingApi;
use crate::components::{PricingPanel, StationList};
use crate::config::DashboardConfig;
use crate::loader;
use crate::state::{DashboardState, Phase};

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<DashboardConfig>();
    let api = use_hook(|| HttpChargingApi::new(&config));
    let state = use_signal(DashboardState::default);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                // errors are already recorded in state
                let _ = loader::refresh(&api, state).await;
            });
        }
    });

    let delete = use_callback({
        let api = api.clone();
        let policy = config.delete_failure_policy;
        move |station_id: i64| {
            let api = api.clone();
            spawn(async move {
                let outcome = loader::delete_station(&api, state, station_id, policy).await;
                info!("[dashboard] delete of station {station_id}: {outcome:?}");
            });
        }
    });

    // First load once on the client after hydration
    use_effect(move || refresh.call(()));

    // Optional auto refresh
    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let interval_ms = config
            .refresh_interval
            .map(|d| d.as_millis().min(u32::MAX as u128) as u32);
        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut ticker = ticker.clone();
            move || {
                if let Some(t) = ticker.write().take() {
                    t.cancel();
                }
            }
        });

        use_effect({
            let mut ticker = ticker.clone();
            move || {
                let Some(ms) = interval_ms else { return };
                info!("[dashboard] auto refresh every {} ms", ms);
                let handle = Interval::new(ms, move || refresh.call(()));
                if let Some(prev) = ticker.write().replace(handle) {
                    prev.cancel();
                }
            }
        });
    }

    let view = state.read();
    let phase = view.phase();
    let error = view.error_message();
    let stations = view.stations.clone();
    let pricing = view.pricing.clone();
    drop(view);

    let loading = phase == Phase::Loading;
    let button_label = if loading { "Refreshing..." } else { "Refresh Data" };

    rsx! {
        main { class: "w-full max-w-6xl mx-auto space-y-6",
            div { class: "flex items-center justify-between gap-4",
                h1 { class: "text-3xl font-semibold tracking-tight text-slate-100", "EV Charging Network Dashboard" }
                button {
                    class: "px-4 py-2 rounded-lg bg-indigo-500 text-white font-medium shadow hover:bg-indigo-400 disabled:bg-indigo-900 disabled:text-slate-400 transition-colors",
                    disabled: loading,
                    onclick: move |_| refresh.call(()),
                    "{button_label}"
                }
            }

            div { class: "grid gap-6 md:grid-cols-3",
                // Stations
                div { class: "md:col-span-2 rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
                    h2 { class: "text-xl font-medium text-slate-200", "Live Station Status" }
                    if let Some(err) = error {
                        p { class: "text-red-400 text-sm font-medium", "Error: {err}" }
                    }
                    StationList { stations, on_delete: delete }
                }
                // Pricing
                div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 backdrop-blur-sm shadow-xl p-6 space-y-4",
                    h2 { class: "text-xl font-medium text-slate-200", "Grid Info" }
                    PricingPanel { pricing }
                }
            }
        }
    }
}
