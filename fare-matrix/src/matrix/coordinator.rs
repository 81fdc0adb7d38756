//! Bounded-parallel fan-out over station pairs.
//!
//! Each pair becomes one task on the runtime. A semaphore permit is
//! acquired before a task is spawned and released when it finishes, so at
//! most `workers` fetches are ever in flight. Results are collected from a
//! `JoinSet` in completion order.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tracing::{debug, warn};

use super::config::MatrixConfig;
use super::fetch::{FareSource, FetchOutcome, NotFound, PairResult, fetch_pair};
use super::pairs::StationPair;

/// Runs every pair's fetch under the configured worker budget.
pub struct Coordinator<S> {
    source: Arc<S>,
    config: Arc<MatrixConfig>,
}

impl<S: FareSource + 'static> Coordinator<S> {
    pub fn new(source: Arc<S>, config: MatrixConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    /// Fetch all pairs, returning one result per pair in completion order.
    ///
    /// A failing or panicking fetch yields a not-found result for its pair
    /// and never stops the others. Nothing is retried.
    pub async fn run(&self, pairs: Vec<StationPair>) -> Vec<PairResult> {
        let semaphore = Arc::new(Semaphore::new(self.config.workers.max(1)));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::with_capacity(pairs.len());
        let mut results = Vec::with_capacity(pairs.len());

        debug!(
            pairs = pairs.len(),
            workers = self.config.workers,
            "Starting fetches"
        );

        for pair in pairs {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!(pair = %pair, "Worker pool closed, skipping fetch");
                    results.push(PairResult::new(
                        &pair,
                        FetchOutcome::NotFound(NotFound::FetchFailure(
                            "worker pool closed".to_string(),
                        )),
                    ));
                    continue;
                }
            };

            let source = Arc::clone(&self.source);
            let config = Arc::clone(&self.config);
            let spawned = pair.clone();

            let handle = tasks.spawn(async move {
                let _permit = permit;
                let fetched = AssertUnwindSafe(fetch_pair(source.as_ref(), &pair, &config))
                    .catch_unwind()
                    .await;

                fetched.unwrap_or_else(|_| {
                    warn!(pair = %pair, "Fetch task panicked");
                    PairResult::new(
                        &pair,
                        FetchOutcome::NotFound(NotFound::FetchFailure(
                            "fetch task panicked".to_string(),
                        )),
                    )
                })
            });
            pending.insert(handle.id(), spawned);
        }

        results.extend(collect(tasks, pending).await);

        debug!(results = results.len(), "All fetches complete");
        results
    }
}

/// Drain `tasks`, keeping one result per spawned pair.
///
/// A task that never produced a result (cancelled, or a panic that
/// escaped) is recorded as a fetch failure for the pair it was spawned for.
async fn collect(
    mut tasks: JoinSet<PairResult>,
    mut pending: HashMap<task::Id, StationPair>,
) -> Vec<PairResult> {
    let mut results = Vec::with_capacity(pending.len());

    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((id, result)) => {
                pending.remove(&id);
                results.push(result);
            }
            Err(e) => {
                let Some(pair) = pending.remove(&e.id()) else {
                    warn!(error = %e, "Unknown fetch task did not complete");
                    continue;
                };
                warn!(pair = %pair, error = %e, "Fetch task did not complete");
                results.push(PairResult::new(
                    &pair,
                    FetchOutcome::NotFound(NotFound::FetchFailure(e.to_string())),
                ));
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::domain::{Route, StationIndex, TrainModel, TravelDate};
    use crate::matrix::pairs::forward_pairs;
    use crate::shohoz::{ShohozError, TripQuery, TripSearchResponse};

    /// Source that sleeps, records peak concurrency, and fails on request.
    struct SlowSource {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        calls: Mutex<Vec<(String, String)>>,
        fail_from: Option<&'static str>,
        panic_from: Option<&'static str>,
    }

    impl SlowSource {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
                calls: Mutex::new(Vec::new()),
                fail_from: None,
                panic_from: None,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl FareSource for SlowSource {
        async fn search_trips(
            &self,
            query: &TripQuery,
        ) -> Result<TripSearchResponse, ShohozError> {
            self.calls
                .lock()
                .unwrap()
                .push((query.from_city.clone(), query.to_city.clone()));

            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.panic_from == Some(query.from_city.as_str()) {
                panic!("simulated fetch panic");
            }
            if self.fail_from == Some(query.from_city.as_str()) {
                return Err(ShohozError::Api {
                    status: 500,
                    message: "down".into(),
                });
            }

            Ok(serde_json::from_str(
                r#"{"data": {"trains": [{"train_model": "707", "seat_types": [
                    {"type": "SHULOV", "seat_counts": {"online": 1, "offline": 0}, "fare": 50}
                ]}]}}"#,
            )
            .unwrap())
        }
    }

    fn config(workers: usize) -> MatrixConfig {
        MatrixConfig::new(
            TrainModel::parse("707").unwrap(),
            TravelDate::parse("19-Nov-2024").unwrap(),
        )
        .with_workers(workers)
    }

    fn route(n: usize) -> Route {
        Route::new((0..n).map(|i| format!("S{i}")))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn every_pair_fetched_exactly_once() {
        let source = Arc::new(SlowSource::new());
        let pairs = forward_pairs(&route(8));
        let coordinator = Coordinator::new(Arc::clone(&source), config(10));

        let results = coordinator.run(pairs).await;

        assert_eq!(results.len(), 28);
        assert_eq!(source.call_count(), 28);

        let keys: HashSet<(StationIndex, StationIndex)> =
            results.iter().map(|r| (r.origin, r.destination)).collect();
        assert_eq!(keys.len(), 28);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrency_never_exceeds_budget() {
        let source = Arc::new(SlowSource::new());
        let coordinator = Coordinator::new(Arc::clone(&source), config(3));

        coordinator.run(forward_pairs(&route(10))).await;

        let peak = source.peak.load(Ordering::SeqCst);
        assert!(peak <= 3, "peak concurrency {peak} exceeded budget");
        assert!(peak >= 1);
    }

    #[tokio::test]
    async fn single_worker_still_completes() {
        let source = Arc::new(SlowSource::new());
        let coordinator = Coordinator::new(Arc::clone(&source), config(0));

        let results = coordinator.run(forward_pairs(&route(4))).await;

        assert_eq!(results.len(), 6);
        assert_eq!(source.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failures_do_not_abort_siblings() {
        let mut source = SlowSource::new();
        source.fail_from = Some("S0");
        let source = Arc::new(source);
        let coordinator = Coordinator::new(Arc::clone(&source), config(2));

        let results = coordinator.run(forward_pairs(&route(4))).await;

        assert_eq!(results.len(), 6);
        let failed = results
            .iter()
            .filter(|r| matches!(r.outcome, FetchOutcome::NotFound(_)))
            .count();
        assert_eq!(failed, 3);
        assert!(
            results
                .iter()
                .filter(|r| r.origin != StationIndex(0))
                .all(|r| r.outcome.seat_info().is_some())
        );
    }

    #[tokio::test]
    async fn panicking_fetch_becomes_not_found() {
        let mut source = SlowSource::new();
        source.panic_from = Some("S1");
        let source = Arc::new(source);
        let coordinator = Coordinator::new(Arc::clone(&source), config(4));

        let results = coordinator.run(forward_pairs(&route(3))).await;

        assert_eq!(results.len(), 3);
        let panicked = results
            .iter()
            .find(|r| r.origin == StationIndex(1))
            .unwrap();
        assert!(matches!(
            panicked.outcome,
            FetchOutcome::NotFound(NotFound::FetchFailure(_))
        ));
    }

    #[tokio::test]
    async fn cancelled_task_still_yields_its_pair() {
        let pairs = forward_pairs(&route(3));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::new();

        let done = pairs[0].clone();
        let handle = tasks.spawn(async move {
            PairResult::new(&done, FetchOutcome::NotFound(NotFound::TrainAbsent))
        });
        pending.insert(handle.id(), pairs[0].clone());

        let stuck = pairs[1].clone();
        let handle = tasks.spawn(async move {
            std::future::pending::<()>().await;
            PairResult::new(&stuck, FetchOutcome::NotFound(NotFound::TrainAbsent))
        });
        pending.insert(handle.id(), pairs[1].clone());
        handle.abort();

        let results = collect(tasks, pending).await;

        assert_eq!(results.len(), 2);
        let cancelled = results
            .iter()
            .find(|r| r.destination == StationIndex(2))
            .unwrap();
        assert_eq!(cancelled.origin, StationIndex(0));
        assert!(matches!(
            cancelled.outcome,
            FetchOutcome::NotFound(NotFound::FetchFailure(_))
        ));
    }

    #[tokio::test]
    async fn no_pairs_no_calls() {
        let source = Arc::new(SlowSource::new());
        let coordinator = Coordinator::new(Arc::clone(&source), config(10));

        let results = coordinator.run(Vec::new()).await;

        assert!(results.is_empty());
        assert_eq!(source.call_count(), 0);
    }
}
