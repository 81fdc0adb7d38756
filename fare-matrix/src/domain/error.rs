//! Domain error types.
//!
//! These errors represent values that failed validation at the edges of
//! the system: command-line arguments and schedule documents.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Train identifier is empty or contains unexpected characters
    #[error("invalid train model {0:?}: must be non-empty ASCII letters or digits")]
    InvalidTrainModel(String),

    /// Travel date does not match DD-Mon-YYYY
    #[error("invalid travel date {0:?}: expected DD-Mon-YYYY (e.g. 19-Nov-2024)")]
    InvalidDate(String),

    /// Weekday abbreviation not recognised
    #[error("invalid weekday {0:?}")]
    InvalidWeekday(String),

    /// Seat type identifier not recognised
    #[error("unknown seat type {0:?}")]
    UnknownSeatType(String),

    /// Cell metric name not recognised
    #[error("unknown cell metric {0:?}: expected seats or fare")]
    UnknownCellMetric(String),
}
