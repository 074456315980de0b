//! HTTP access to the station and pricing services.

use dioxus::prelude::*;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use dioxus::logger::tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::shared::types::{PricingDto, StationDto};

#[cfg(test)]
use mockall::automock;

/// Config as resolved by the server process (runtime env and `.env`).
#[server(GetDashboardConfig)]
pub async fn get_dashboard_config() -> Result<DashboardConfig, ServerFnError> {
    Ok(DashboardConfig::from_env())
}

/// Failure of a single request. Kept cloneable so it can live in view state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, TLS, CORS, ...).
    #[error("{method} {url} could not be sent: {message}")]
    Transport {
        method: String,
        url: String,
        message: String,
    },

    /// The service answered with a non-2xx status.
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },

    /// The body could not be read or did not match the expected shape.
    #[error("decoding JSON from {method} {url} failed: {message}")]
    Decode {
        method: String,
        url: String,
        message: String,
    },
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait(?Send)]
pub trait ChargingApi {
    /// `GET /stations` on the station service.
    async fn list_stations(&self) -> Result<Vec<StationDto>, ApiError>;

    /// `DELETE /stations/{id}` on the station service.
    async fn delete_station(&self, station_id: i64) -> Result<(), ApiError>;

    /// `GET /pricing/current` on the pricing service.
    async fn current_pricing(&self) -> Result<PricingDto, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpChargingApi {
    client: Client,
    station_api_url: String,
    pricing_api_url: String,
}

impl HttpChargingApi {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            client: Client::new(),
            station_api_url: config.station_api_url.clone(),
            pricing_api_url: config.pricing_api_url.clone(),
        }
    }

    fn station_url(&self, path: &str) -> String {
        format!("{}{}", self.station_api_url, path)
    }

    fn pricing_url(&self, path: &str) -> String {
        format!("{}{}", self.pricing_api_url, path)
    }

    async fn send(&self, method: Method, url: &str) -> Result<Response, ApiError> {
        debug!("[api] {} {}", method, url);
        let res = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("[api] request error on {} {}: {}", method, url, e);
                ApiError::Transport {
                    method: method.to_string(),
                    url: url.to_string(),
                    message: e.to_string(),
                }
            })?;
        if !res.status().is_success() {
            let status = res.status();
            warn!("[api] {} {} answered {}", method, url, status);
            return Err(ApiError::Status {
                method: method.to_string(),
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(res)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let res = self.send(Method::GET, url).await?;
        let decode_err = |message: String| ApiError::Decode {
            method: Method::GET.to_string(),
            url: url.to_string(),
            message,
        };
        let bytes = res.bytes().await.map_err(|e| decode_err(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let snip = String::from_utf8_lossy(&bytes);
            let snip = snip.chars().take(300).collect::<String>();
            warn!("[api] bad JSON from {}: {}\nBody snippet: {}", url, e, snip);
            decode_err(e.to_string())
        })
    }
}

#[async_trait::async_trait(?Send)]
impl ChargingApi for HttpChargingApi {
    async fn list_stations(&self) -> Result<Vec<StationDto>, ApiError> {
        self.fetch_json(&self.station_url("/stations")).await
    }

    async fn delete_station(&self, station_id: i64) -> Result<(), ApiError> {
        let url = self.station_url(&format!("/stations/{station_id}"));
        self.send(Method::DELETE, &url).await.map(|_| ())
    }

    async fn current_pricing(&self) -> Result<PricingDto, ApiError> {
        self.fetch_json(&self.pricing_url("/pricing/current")).await
    }
}
