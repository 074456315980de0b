#![cfg(feature = "server")]

use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
