use serde::Deserialize;

/// Status string the station service uses for an idle charger.
pub const STATUS_AVAILABLE: &str = "available";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationDto {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub status: String,
    pub power_kw: f64,
    #[serde(default)]
    pub created_at: Option<String>, // rfc3339
}

impl StationDto {
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemandDto {
    pub demand_description: String,
    #[serde(default)]
    pub demand_score: Option<f64>, // 0..1
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingDto {
    pub price_per_kwh: f64,
    pub based_on_demand: DemandDto,
}
