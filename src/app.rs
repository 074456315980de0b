use dioxus::prelude::*;

use dioxus::logger::tracing::warn;

use crate::api::get_dashboard_config;
use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // ssr data (server waits): the browser only has compile-time values
    let resolved = use_server_future(get_dashboard_config)?;
    let resolved_v = resolved.read_unchecked();
    let config = match &*resolved_v {
        Some(Ok(cfg)) => cfg.clone(),
        Some(Err(e)) => {
            warn!("[app] server config unavailable ({e}), using build-time values");
            DashboardConfig::from_env()
        }
        None => DashboardConfig::from_env(),
    };
    drop(resolved_v);
    // Resolved once per app instance and shared with the view
    use_context_provider(move || config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "EV Charging Network Dashboard" }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        // Page container
        div { class: "min-h-screen bg-slate-950 text-slate-100 p-6",
            Dashboard {}
        }
    }
}
