//! Schedule lookup error types.

use std::path::PathBuf;

use crate::domain::TrainModel;

/// Errors that stop a run before any fare is fetched.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Schedule directory could not be read
    #[error("failed to read schedules from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No schedule document describes the requested train
    #[error("no matching train data found for model {0}")]
    NotFound(TrainModel),

    /// The train does not run on the requested weekday
    #[error("the train '{name}' (model: {train}) does not run on {weekday}; running days: {days}")]
    NotRunning {
        train: TrainModel,
        name: String,
        weekday: String,
        days: String,
    },
}
