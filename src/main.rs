use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod loader;
mod shared;
mod state;
mod utils;

#[cfg(feature = "server")]
mod logging;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dotenvy::dotenv;
        // .env must be loaded before anything reads the dashboard config
        dotenv().ok();
        logging::init_tracing();

        let cfg = config::DashboardConfig::from_env();
        dioxus::logger::tracing::info!(
            "[boot] station API {} / pricing API {} / delete failures: {:?} / auto refresh: {:?}",
            cfg.station_api_url,
            cfg.pricing_api_url,
            cfg.delete_failure_policy,
            cfg.refresh_interval
        );
    }
    dioxus::launch(app::App);
}
