//! Domain types for the fare matrix.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod date;
mod error;
mod seat;
mod station;
mod train;

pub use date::{TravelDate, parse_weekday, weekday_abbrev};
pub use error::DomainError;
pub use seat::{SeatInfoMap, SeatType, SeatTypeInfo};
pub use station::{Route, Station, StationIndex};
pub use train::TrainModel;
