//! Run configuration for building a fare matrix.

use crate::domain::{SeatType, TrainModel, TravelDate};

/// Default number of fetches in flight at once.
pub const DEFAULT_WORKERS: usize = 10;

/// Parameters shared by every fetch in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// The train whose availability is tabulated.
    pub train: TrainModel,

    /// Date of journey.
    pub date: TravelDate,

    /// Maximum concurrent fetches. Always at least 1.
    pub workers: usize,

    /// Seat class sent as the search filter. The response still lists
    /// every seat class the train carries.
    pub seat_class_filter: SeatType,
}

impl MatrixConfig {
    pub fn new(train: TrainModel, date: TravelDate) -> Self {
        Self {
            train,
            date,
            workers: DEFAULT_WORKERS,
            seat_class_filter: SeatType::Shulov,
        }
    }

    /// Set the worker budget. Zero is treated as one.
    pub fn with_workers(mut self, n: usize) -> Self {
        self.workers = n.max(1);
        self
    }

    pub fn with_seat_class_filter(mut self, seat: SeatType) -> Self {
        self.seat_class_filter = seat;
        self
    }
}
