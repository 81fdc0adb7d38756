//! Trip-search response DTOs.
//!
//! These types map directly to the booking service's JSON. They use
//! `Option` liberally because the service omits or nulls lists when a
//! route has nothing to offer.

use serde::Deserialize;

/// Response from `search-trips-v2`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripSearchResponse {
    pub data: Option<TripSearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripSearchData {
    /// Trains running between the queried cities on the date.
    pub trains: Option<Vec<TrainItem>>,
}

/// One train in the search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainItem {
    /// Train identifier, e.g. "707".
    pub train_model: Option<String>,

    /// Availability per seat class.
    pub seat_types: Option<Vec<SeatTypeItem>>,
}

/// Availability and fare for one seat class on a train.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatTypeItem {
    /// Seat class identifier, e.g. "SHULOV".
    #[serde(rename = "type")]
    pub seat_type: String,

    pub seat_counts: Option<SeatCounts>,

    /// Fare in BDT. Sent as a number or a numeric string.
    pub fare: Option<FareValue>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SeatCounts {
    #[serde(default)]
    pub online: u32,
    #[serde(default)]
    pub offline: u32,
}

/// A fare as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FareValue {
    Number(f64),
    Text(String),
}

impl FareValue {
    /// Numeric value, or `None` if the text is not a finite non-negative number.
    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            FareValue::Number(n) => *n,
            FareValue::Text(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        };
        (value.is_finite() && value >= 0.0).then_some(value)
    }
}

impl TripSearchResponse {
    /// Trains in the response; empty when the service sent none.
    pub fn trains(&self) -> &[TrainItem] {
        self.data
            .as_ref()
            .and_then(|d| d.trains.as_deref())
            .unwrap_or(&[])
    }
}
