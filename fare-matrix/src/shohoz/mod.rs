//! Booking service (Shohoz rail) trip-search client.
//!
//! One `search-trips-v2` request answers "which trains run between these
//! two cities on this date, and how many seats of each class are left?".
//! The fare matrix asks that question once per forward station pair.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, ShohozClient, ShohozConfig, TripQuery};
pub use convert::{convert_train, extract_seat_info, find_train};
pub use error::ShohozError;
pub use types::{
    FareValue, SeatCounts, SeatTypeItem, TrainItem, TripSearchData, TripSearchResponse,
};
