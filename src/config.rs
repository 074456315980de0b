//! Dashboard configuration.
//!
//! Resolved by the server process and shipped to the browser through the
//! `get_dashboard_config` server function, then handed to the view through the
//! Dioxus context. Each key is looked up in the runtime environment first (with
//! `.env` loaded on the server), then in the value baked in at compile time
//! (the browser's fallback when no server answers), then falls back to a default.

use std::time::Duration;

use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATION_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PRICING_API_URL: &str = "http://localhost:8002";

pub const STATION_API_URL_KEY: &str = "STATION_API_URL";
pub const PRICING_API_URL_KEY: &str = "PRICING_API_URL";
pub const DELETE_FAILURE_POLICY_KEY: &str = "DELETE_FAILURE_POLICY";
pub const REFRESH_INTERVAL_SECS_KEY: &str = "REFRESH_INTERVAL_SECS";

/// What to do with an optimistically removed station when the DELETE fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteFailurePolicy {
    /// Leave the row removed until the next refresh.
    #[default]
    Keep,
    /// Put the row back where it was.
    Restore,
}

impl DeleteFailurePolicy {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "keep" => Some(Self::Keep),
            "restore" | "rollback" => Some(Self::Restore),
            _ => None,
        }
    }
}

/// Shipped from the server to the browser, which has no runtime environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub station_api_url: String,
    pub pricing_api_url: String,
    pub delete_failure_policy: DeleteFailurePolicy,
    pub refresh_interval: Option<Duration>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            station_api_url: DEFAULT_STATION_API_URL.to_string(),
            pricing_api_url: DEFAULT_PRICING_API_URL.to_string(),
            delete_failure_policy: DeleteFailurePolicy::default(),
            refresh_interval: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| compile_time_value(key).map(str::to_string))
        })
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let station_api_url = get(STATION_API_URL_KEY)
            .map(|u| normalize_base_url(&u))
            .unwrap_or(defaults.station_api_url);
        let pricing_api_url = get(PRICING_API_URL_KEY)
            .map(|u| normalize_base_url(&u))
            .unwrap_or(defaults.pricing_api_url);

        let delete_failure_policy = match get(DELETE_FAILURE_POLICY_KEY) {
            Some(raw) => DeleteFailurePolicy::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "[config] {DELETE_FAILURE_POLICY_KEY}={raw:?} not understood, using {:?}",
                    defaults.delete_failure_policy
                );
                defaults.delete_failure_policy
            }),
            None => defaults.delete_failure_policy,
        };

        let refresh_interval = match get(REFRESH_INTERVAL_SECS_KEY) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    warn!("[config] {REFRESH_INTERVAL_SECS_KEY}={raw:?} ignored: {e}");
                    None
                }
            },
            None => None,
        };

        Self {
            station_api_url,
            pricing_api_url,
            delete_failure_policy,
            refresh_interval,
        }
    }
}

fn compile_time_value(key: &str) -> Option<&'static str> {
    match key {
        STATION_API_URL_KEY => option_env!("STATION_API_URL"),
        PRICING_API_URL_KEY => option_env!("PRICING_API_URL"),
        DELETE_FAILURE_POLICY_KEY => option_env!("DELETE_FAILURE_POLICY"),
        REFRESH_INTERVAL_SECS_KEY => option_env!("REFRESH_INTERVAL_SECS"),
        _ => None,
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
