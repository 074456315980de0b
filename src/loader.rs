//! Async operations of the dashboard: the paired load and the optimistic delete.

use dioxus::logger::tracing::debug;
use dioxus::prelude::{Signal, Writable};

use crate::api::ChargingApi;
use crate::config::DeleteFailurePolicy;
use crate::state::{DashboardState, DeleteOutcome, LoadFailure, LoadResult};

/// Somewhere the dashboard state can be mutated from the UI executor.
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl StateCell for Signal<DashboardState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut self.write())
    }
}

/// Fetches stations and pricing concurrently and waits for both to settle.
pub async fn load_dashboard<A>(api: &A) -> LoadResult
where
    A: ChargingApi + ?Sized,
{
    let (stations, pricing) = futures::join!(api.list_stations(), api.current_pricing());
    LoadResult { stations, pricing }
}

/// One refresh cycle. The busy flag is raised before the requests go out and
/// lowered once both have settled, whatever they returned.
pub async fn refresh<A, S>(api: &A, mut state: S) -> Result<(), LoadFailure>
where
    A: ChargingApi + ?Sized,
    S: StateCell,
{
    let ticket = state.update(|s| s.begin_refresh());
    let result = load_dashboard(api).await;
    state.update(|s| s.finish_refresh(ticket, result))
}

/// Removes the station locally, then asks the station service to delete it.
pub async fn delete_station<A, S>(
    api: &A,
    mut state: S,
    station_id: i64,
    policy: DeleteFailurePolicy,
) -> DeleteOutcome
where
    A: ChargingApi + ?Sized,
    S: StateCell,
{
    let pending = state.update(|s| s.begin_delete(station_id));
    if let Some(removed) = pending.removed_station() {
        debug!("[dashboard] removed {:?} locally, asking backend", removed.name);
    }
    let result = api.delete_station(station_id).await;
    state.update(|s| s.settle_delete(pending, result, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockChargingApi};
    use crate::state::tests::{pricing, station, status_error};
    use crate::state::Phase;
    use mockall::predicate::eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    impl StateCell for Rc<RefCell<DashboardState>> {
        fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
            f(&mut self.borrow_mut())
        }
    }

    fn shared_state() -> Rc<RefCell<DashboardState>> {
        Rc::new(RefCell::new(DashboardState::default()))
    }

    fn happy_api() -> MockChargingApi {
        let mut api = MockChargingApi::new();
        api.expect_list_stations()
            .returning(|| Ok(vec![station(1, "available")]));
        api.expect_current_pricing()
            .returning(|| Ok(pricing(0.35, "low")));
        api
    }

    #[tokio::test]
    async fn refresh_populates_both_slots() {
        let api = happy_api();
        let state = shared_state();

        refresh(&api, state.clone()).await.unwrap();

        let s = state.borrow();
        assert_eq!(s.stations, vec![station(1, "available")]);
        assert_eq!(s.pricing, Some(pricing(0.35, "low")));
        assert_eq!(s.phase(), Phase::Loaded);
    }

    #[tokio::test]
    async fn busy_while_requests_are_outstanding() {
        let state = shared_state();
        let mut api = MockChargingApi::new();
        let seen = state.clone();
        api.expect_list_stations().times(1).returning_st(move || {
            assert!(seen.borrow().is_busy());
            Err(ApiError::Transport {
                method: "GET".into(),
                url: "http://localhost:8000/stations".into(),
                message: "connection refused".into(),
            })
        });
        let seen = state.clone();
        api.expect_current_pricing().times(1).returning_st(move || {
            assert!(seen.borrow().is_busy());
            Ok(pricing(0.2, "Off-Peak"))
        });

        let failure = refresh(&api, state.clone()).await.unwrap_err();

        assert!(failure.stations.is_some());
        assert!(!state.borrow().is_busy());
        assert_eq!(state.borrow().phase(), Phase::Errored);
    }

    #[tokio::test]
    async fn station_500_fails_whole_cycle() {
        let state = shared_state();
        refresh(&happy_api(), state.clone()).await.unwrap();

        let mut api = MockChargingApi::new();
        api.expect_list_stations()
            .returning(|| Err(status_error("GET", "http://localhost:8000/stations", 500)));
        api.expect_current_pricing()
            .returning(|| Ok(pricing(0.65, "Peak")));

        let failure = refresh(&api, state.clone()).await.unwrap_err();
        assert!(failure.pricing.is_none());

        let s = state.borrow();
        assert_eq!(s.phase(), Phase::Errored);
        assert_eq!(s.stations, vec![station(1, "available")]);
        assert_eq!(s.pricing, Some(pricing(0.65, "Peak")));
        assert!(s.error_message().unwrap().contains("stations: "));
    }

    #[tokio::test]
    async fn delete_is_optimistic_and_hits_backend() {
        let state = shared_state();
        refresh(&happy_api(), state.clone()).await.unwrap();

        let mut api = MockChargingApi::new();
        let seen = state.clone();
        api.expect_delete_station()
            .with(eq(1))
            .times(1)
            .returning_st(move |_| {
                assert!(seen.borrow().stations.is_empty());
                Ok(())
            });

        let outcome = delete_station(&api, state.clone(), 1, DeleteFailurePolicy::Keep).await;
        assert_eq!(outcome, DeleteOutcome::Committed);
        assert!(state.borrow().stations.is_empty());
    }

    #[tokio::test]
    async fn failed_delete_sets_error_without_rollback() {
        let state = shared_state();
        refresh(&happy_api(), state.clone()).await.unwrap();

        let mut api = MockChargingApi::new();
        api.expect_delete_station()
            .with(eq(1))
            .returning(|id| Err(status_error("DELETE", &format!("http://localhost:8000/stations/{id}"), 500)));

        let outcome = delete_station(&api, state.clone(), 1, DeleteFailurePolicy::Keep).await;
        assert_eq!(outcome, DeleteOutcome::Kept);
        let s = state.borrow();
        assert!(s.stations.is_empty());
        assert!(s
            .error_message()
            .unwrap()
            .starts_with("Failed to delete station 1. Please refresh."));
    }

    #[tokio::test]
    async fn failed_delete_with_restore_policy_rolls_back() {
        let state = shared_state();
        refresh(&happy_api(), state.clone()).await.unwrap();

        let mut api = MockChargingApi::new();
        api.expect_delete_station()
            .returning(|_| Err(status_error("DELETE", "http://localhost:8000/stations/1", 500)));

        let outcome = delete_station(&api, state.clone(), 1, DeleteFailurePolicy::Restore).await;
        assert_eq!(outcome, DeleteOutcome::RolledBack);
        assert_eq!(state.borrow().stations, vec![station(1, "available")]);
        assert!(state.borrow().error.is_some());
    }
}
