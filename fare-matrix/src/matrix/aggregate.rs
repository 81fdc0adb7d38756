//! Aggregation of pair results into a seat-type-indexed matrix.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::domain::{Route, SeatType, SeatTypeInfo, StationIndex};

use super::fetch::{FetchOutcome, NotFound, PairResult};

/// Composite key of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatrixKey {
    pub seat: SeatType,
    pub origin: StationIndex,
    pub destination: StationIndex,
}

impl MatrixKey {
    pub fn new(seat: SeatType, origin: StationIndex, destination: StationIndex) -> Self {
        Self {
            seat,
            origin,
            destination,
        }
    }
}

/// Seat availability for every seat type and forward pair of a route.
///
/// Created fully zero-filled, so every forward `(seat, origin,
/// destination)` key has exactly one entry no matter how many fetches
/// succeed. Keys that are not forward pairs are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FareMatrix {
    route: Route,
    entries: BTreeMap<MatrixKey, SeatTypeInfo>,
}

impl FareMatrix {
    /// A matrix with a zero record for every forward key.
    pub fn zeroed(route: Route) -> Self {
        let mut entries = BTreeMap::new();
        let n = route.len();

        for seat in SeatType::ALL {
            for origin in 0..n {
                for destination in origin + 1..n {
                    entries.insert(
                        MatrixKey::new(seat, StationIndex(origin), StationIndex(destination)),
                        SeatTypeInfo::ZERO,
                    );
                }
            }
        }

        Self { route, entries }
    }

    /// Zero-fill, then apply every result. Order of `results` does not
    /// affect the outcome since each result writes its own keys.
    pub fn aggregate<'a, I>(route: Route, results: I) -> Self
    where
        I: IntoIterator<Item = &'a PairResult>,
    {
        let mut matrix = Self::zeroed(route);
        for result in results {
            matrix.apply(result);
        }
        matrix
    }

    /// Merge one pair result. Returns true if any entry was written.
    ///
    /// Not-found results leave the zero records in place; results for
    /// non-forward or out-of-route pairs are ignored.
    pub fn apply(&mut self, result: &PairResult) -> bool {
        let Some(map) = result.outcome.seat_info() else {
            debug!(
                origin = %result.origin,
                destination = %result.destination,
                "No seat data, keeping zero records"
            );
            return false;
        };

        if !self.is_forward_pair(result.origin, result.destination) {
            debug!(
                origin = %result.origin,
                destination = %result.destination,
                "Ignoring result for non-forward pair"
            );
            return false;
        }

        for (seat, info) in map.iter() {
            self.entries.insert(
                MatrixKey::new(seat, result.origin, result.destination),
                info,
            );
        }
        true
    }

    /// Entry for a forward pair, or `None` for any other key.
    pub fn get(
        &self,
        seat: SeatType,
        origin: StationIndex,
        destination: StationIndex,
    ) -> Option<SeatTypeInfo> {
        if !self.is_forward_pair(origin, destination) {
            return None;
        }
        self.entries
            .get(&MatrixKey::new(seat, origin, destination))
            .copied()
    }

    /// Whether `origin` precedes `destination` and both are on the route.
    pub fn is_forward_pair(&self, origin: StationIndex, destination: StationIndex) -> bool {
        origin.precedes(destination) && destination.0 < self.route.len()
    }

    /// True if any forward pair has at least one seat of this type.
    pub fn has_availability(&self, seat: SeatType) -> bool {
        self.entries_for(seat).any(|(_, info)| info.total() > 0)
    }

    /// Entries of one seat type, origin-major.
    pub fn entries_for(
        &self,
        seat: SeatType,
    ) -> impl Iterator<Item = (&MatrixKey, &SeatTypeInfo)> + '_ {
        let start = MatrixKey::new(seat, StationIndex(0), StationIndex(0));
        self.entries
            .range(start..)
            .take_while(move |(key, _)| key.seat == seat)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tally of how the fetches of one run turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchSummary {
    pub with_data: usize,
    pub train_absent: usize,
    pub failed: usize,
}

impl FetchSummary {
    pub fn from_results(results: &[PairResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match &result.outcome {
                FetchOutcome::Found(_) => summary.with_data += 1,
                FetchOutcome::NotFound(NotFound::TrainAbsent) => summary.train_absent += 1,
                FetchOutcome::NotFound(_) => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.with_data + self.train_absent + self.failed
    }
}

impl fmt::Display for FetchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fetched {} pairs: {} with data, {} without the train, {} failed",
            self.total(),
            self.with_data,
            self.train_absent,
            self.failed
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::SeatInfoMap;
    use proptest::prelude::*;

    const STATIONS: usize = 6;

    /// One result per forward pair, each either found or not found.
    fn results_strategy() -> impl Strategy<Value = Vec<PairResult>> {
        let pairs: Vec<(usize, usize)> = (0..STATIONS)
            .flat_map(|o| (o + 1..STATIONS).map(move |d| (o, d)))
            .collect();
        let n = pairs.len();

        proptest::collection::vec(
            proptest::option::of((0usize..SeatType::COUNT, 0u32..5, 0u32..5, 0u32..2000)),
            n,
        )
        .prop_map(move |cells| {
            pairs
                .iter()
                .zip(cells)
                .map(|(&(o, d), cell)| {
                    let outcome = match cell {
                        Some((slot, online, offline, fare)) => {
                            let mut map = SeatInfoMap::zeroed();
                            map.set(
                                SeatType::ALL[slot],
                                SeatTypeInfo::new(online, offline, f64::from(fare)),
                            );
                            FetchOutcome::Found(map)
                        }
                        None => FetchOutcome::NotFound(NotFound::TrainAbsent),
                    };
                    PairResult {
                        origin: StationIndex(o),
                        destination: StationIndex(d),
                        outcome,
                    }
                })
                .collect()
        })
    }

    fn route() -> Route {
        Route::new((0..STATIONS).map(|i| format!("S{i}")))
    }

    proptest! {
        /// Completion order never changes the aggregated matrix
        #[test]
        fn order_independent(
            (results, shuffled) in results_strategy()
                .prop_flat_map(|r| (Just(r.clone()), Just(r).prop_shuffle()))
        ) {
            let a = FareMatrix::aggregate(route(), &results);
            let b = FareMatrix::aggregate(route(), &shuffled);
            prop_assert_eq!(a, b);
        }

        /// Every forward key is populated exactly once, whatever the outcomes
        #[test]
        fn always_fully_populated(results in results_strategy()) {
            let matrix = FareMatrix::aggregate(route(), &results);
            prop_assert_eq!(matrix.len(), SeatType::COUNT * STATIONS * (STATIONS - 1) / 2);

            for result in &results {
                for seat in SeatType::ALL {
                    let entry = matrix.get(seat, result.origin, result.destination);
                    prop_assert!(entry.is_some());
                    if result.outcome.seat_info().is_none() {
                        prop_assert_eq!(entry, Some(SeatTypeInfo::ZERO));
                    }
                }
            }
        }
    }
}
