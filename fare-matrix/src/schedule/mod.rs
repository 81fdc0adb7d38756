//! Train schedules from pre-processed JSON documents.
//!
//! A schedule supplies the route order the matrix is built over, and the
//! running days used to refuse dates on which the train does not run.

mod error;
mod store;
mod types;

pub use error::ScheduleError;
pub use store::{ScheduleStore, TrainSchedule};
pub use types::{RouteStop, ScheduleData, ScheduleDocument};
