//! Pairwise seat availability matrix for one train on one date.
//!
//! The pipeline runs in four steps:
//!
//! 1. [`forward_pairs`] lists every origin-destination pair in route order.
//! 2. [`Coordinator`] fetches each pair once, at most `workers` at a time.
//! 3. [`FareMatrix::aggregate`] zero-fills the matrix and merges results.
//! 4. The matrix is handed to [`crate::render`] for display.

mod aggregate;
mod config;
mod coordinator;
mod fetch;
mod pairs;


use std::sync::Arc;

use tracing::info;

use crate::schedule::{ScheduleError, ScheduleStore, TrainSchedule};

pub use aggregate::{FareMatrix, FetchSummary, MatrixKey};
pub use config::{DEFAULT_WORKERS, MatrixConfig};
pub use coordinator::Coordinator;
pub use fetch::{FareSource, FetchOutcome, NotFound, PairResult, fetch_pair, query_for};
pub use pairs::{StationPair, forward_pairs, pair_count};

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct MatrixReport {
    pub schedule: TrainSchedule,
    pub matrix: FareMatrix,
    pub summary: FetchSummary,
}

/// Build the matrix for `config.train` on `config.date`.
///
/// Fails before any query is made if the train has no schedule or does
/// not run on the date. Individual fetch failures never fail the run.
pub async fn build_matrix<S: FareSource + 'static>(
    source: Arc<S>,
    schedules: &ScheduleStore,
    config: &MatrixConfig,
) -> Result<MatrixReport, ScheduleError> {
    let schedule = schedules.plan(&config.train, config.date)?.clone();

    let pairs = forward_pairs(&schedule.route);
    info!(
        train = %config.train,
        date = %config.date,
        stations = schedule.route.len(),
        pairs = pairs.len(),
        "Fetching seat availability"
    );

    let results = Coordinator::new(source, config.clone()).run(pairs).await;
    let summary = FetchSummary::from_results(&results);
    let matrix = FareMatrix::aggregate(schedule.route.clone(), &results);

    info!("{summary}");

    Ok(MatrixReport {
        schedule,
        matrix,
        summary,
    })
}
