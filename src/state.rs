//! View state of the dashboard and its transitions.
//!
//! Everything here is synchronous; the async side lives in `loader`.

use std::fmt;

use dioxus::logger::tracing::{info, warn};
use thiserror::Error;

use crate::api::ApiError;
use crate::config::DeleteFailurePolicy;
use crate::shared::types::{PricingDto, StationDto};

/// Coarse state of the whole view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    Errored,
}

/// Settled outcome of one load cycle, one result per source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub stations: Result<Vec<StationDto>, ApiError>,
    pub pricing: Result<PricingDto, ApiError>,
}

/// Which sources failed during a load cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub stations: Option<ApiError>,
    pub pricing: Option<ApiError>,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let causes = [("stations", &self.stations), ("pricing", &self.pricing)]
            .into_iter()
            .filter_map(|(name, err)| err.as_ref().map(|e| format!("{name}: {e}")))
            .collect::<Vec<_>>();
        write!(f, "Failed to fetch data from the APIs")?;
        if !causes.is_empty() {
            write!(f, " ({})", causes.join("; "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("{0}")]
    Load(LoadFailure),

    #[error("Failed to delete station {station_id}. Please refresh. ({source})")]
    Delete { station_id: i64, source: ApiError },
}

/// Handle for an in-flight refresh, returned by `begin_refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub generation: u64,
}

/// An optimistic removal waiting for the backend's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub station_id: i64,
    /// Former index and row, if the station was in the local list.
    removed: Option<(usize, StationDto)>,
}

impl PendingDelete {
    pub fn removed_station(&self) -> Option<&StationDto> {
        self.removed.as_ref().map(|(_, s)| s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Backend confirmed the delete.
    Committed,
    /// Backend refused; the row stays removed locally.
    Kept,
    /// Backend refused; the row was put back.
    RolledBack,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub stations: Vec<StationDto>,
    pub pricing: Option<PricingDto>,
    pub error: Option<DashboardError>,
    in_flight: usize,
    settled_once: bool,
    generation: u64,
}

impl DashboardState {
    /// True while at least one refresh is waiting on its requests.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn phase(&self) -> Phase {
        if self.is_busy() || !self.settled_once {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Errored
        } else {
            Phase::Loaded
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.in_flight += 1;
        self.error = None;
        info!(
            "[dashboard] refresh #{} started ({} in flight)",
            self.generation, self.in_flight
        );
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Applies a settled load cycle. Each slot is replaced only by its own
    /// successful result; the cycle counts as failed if either source failed.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: LoadResult,
    ) -> Result<(), LoadFailure> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.settled_once = true;

        let stations_err = match result.stations {
            Ok(stations) => {
                self.stations = stations;
                None
            }
            Err(e) => Some(e),
        };
        let pricing_err = match result.pricing {
            Ok(pricing) => {
                self.pricing = Some(pricing);
                None
            }
            Err(e) => Some(e),
        };

        if stations_err.is_none() && pricing_err.is_none() {
            info!(
                "[dashboard] refresh #{} loaded {} station(s)",
                ticket.generation,
                self.stations.len()
            );
            // A delete failure recorded meanwhile must stay visible
            if matches!(self.error, Some(DashboardError::Load(_))) {
                self.error = None;
            }
            return Ok(());
        }

        let failure = LoadFailure {
            stations: stations_err,
            pricing: pricing_err,
        };
        warn!("[dashboard] refresh #{} failed: {}", ticket.generation, failure);
        self.error = Some(DashboardError::Load(failure.clone()));
        Err(failure)
    }

    /// Removes the station locally before the backend is asked.
    pub fn begin_delete(&mut self, station_id: i64) -> PendingDelete {
        let removed = self
            .stations
            .iter()
            .position(|s| s.id == station_id)
            .map(|idx| (idx, self.stations.remove(idx)));
        if removed.is_none() {
            warn!("[dashboard] station {station_id} not in the local list");
        }
        PendingDelete {
            station_id,
            removed,
        }
    }

    pub fn settle_delete(
        &mut self,
        pending: PendingDelete,
        result: Result<(), ApiError>,
        policy: DeleteFailurePolicy,
    ) -> DeleteOutcome {
        let station_id = pending.station_id;
        let source = match result {
            Ok(()) => {
                info!("[dashboard] station {station_id} deleted");
                return DeleteOutcome::Committed;
            }
            Err(e) => e,
        };
        warn!("[dashboard] deleting station {station_id} failed: {source}");
        self.error = Some(DashboardError::Delete { station_id, source });

        match (policy, pending.removed) {
            (DeleteFailurePolicy::Restore, Some((idx, station))) => {
                // A refresh may already have brought it back.
                if !self.stations.iter().any(|s| s.id == station_id) {
                    let idx = idx.min(self.stations.len());
                    self.stations.insert(idx, station);
                }
                DeleteOutcome::RolledBack
            }
            _ => DeleteOutcome::Kept,
        }
    }
}
