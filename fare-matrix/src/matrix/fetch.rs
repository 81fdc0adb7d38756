//! Per-pair seat availability fetching.

use std::future::Future;

use tracing::{info, warn};

use crate::domain::{SeatInfoMap, StationIndex};
use crate::shohoz::{ShohozClient, ShohozError, TripQuery, TripSearchResponse, extract_seat_info};

use super::config::MatrixConfig;
use super::pairs::StationPair;

/// Trait for answering trip searches.
///
/// This abstraction allows the coordinator to be tested without a
/// network. Implementations make one attempt per call.
pub trait FareSource: Send + Sync {
    fn search_trips(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<TripSearchResponse, ShohozError>> + Send;
}

impl FareSource for ShohozClient {
    fn search_trips(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<TripSearchResponse, ShohozError>> + Send {
        ShohozClient::search_trips(self, query)
    }
}

/// Why a pair produced no seat data.
///
/// Every reason is zero-filled the same way; the distinction only shows
/// up in logs and the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// The search succeeded but the target train was not listed.
    TrainAbsent,
    /// Transport error or non-success response.
    FetchFailure(String),
    /// The response body could not be parsed.
    ParseFailure(String),
}

impl From<ShohozError> for NotFound {
    fn from(err: ShohozError) -> Self {
        if err.is_parse_failure() {
            NotFound::ParseFailure(err.to_string())
        } else {
            NotFound::FetchFailure(err.to_string())
        }
    }
}

/// Result of fetching one pair.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(SeatInfoMap),
    NotFound(NotFound),
}

impl FetchOutcome {
    pub fn seat_info(&self) -> Option<&SeatInfoMap> {
        match self {
            FetchOutcome::Found(map) => Some(map),
            FetchOutcome::NotFound(_) => None,
        }
    }
}

/// Fetch outcome tagged with the pair it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PairResult {
    pub origin: StationIndex,
    pub destination: StationIndex,
    pub outcome: FetchOutcome,
}

impl PairResult {
    pub fn new(pair: &StationPair, outcome: FetchOutcome) -> Self {
        Self {
            origin: pair.origin.index,
            destination: pair.destination.index,
            outcome,
        }
    }
}

/// Build the trip query for a pair.
pub fn query_for(pair: &StationPair, config: &MatrixConfig) -> TripQuery {
    TripQuery {
        from_city: pair.origin.city.clone(),
        to_city: pair.destination.city.clone(),
        date: config.date,
        seat_class: config.seat_class_filter,
    }
}

/// Query the source once for `pair` and extract the target train's seats.
///
/// Never fails: errors and a missing train both become
/// [`FetchOutcome::NotFound`]. Emits one status line for the pair.
pub async fn fetch_pair<S: FareSource>(
    source: &S,
    pair: &StationPair,
    config: &MatrixConfig,
) -> PairResult {
    let query = query_for(pair, config);
    let from = pair.origin.city.as_str();
    let to = pair.destination.city.as_str();

    let outcome = match source.search_trips(&query).await {
        Ok(response) => match extract_seat_info(&response, &config.train) {
            Some(map) => {
                info!(from, to, seats = map.total_seats(), "Fetched seat data");
                FetchOutcome::Found(map)
            }
            None => {
                warn!(from, to, train = %config.train, "No data for train on this pair");
                FetchOutcome::NotFound(NotFound::TrainAbsent)
            }
        },
        Err(e) => {
            warn!(from, to, error = %e, "Failed to fetch seat data");
            FetchOutcome::NotFound(NotFound::from(e))
        }
    };

    PairResult::new(pair, outcome)
}
