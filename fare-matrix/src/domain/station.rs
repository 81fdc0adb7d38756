//! Stations and route order.

use std::fmt;

/// Position of a station along a train's route.
///
/// Route order is load-bearing: a pair of stations is only meaningful
/// when the origin's index is strictly less than the destination's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationIndex(pub usize);

impl StationIndex {
    /// Returns true if `self` comes strictly before `other` on the route.
    pub fn precedes(self, other: StationIndex) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for StationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A city served by the train, at a fixed position on the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    pub index: StationIndex,
    pub city: String,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.city)
    }
}

/// The ordered sequence of stations a train calls at.
///
/// Indices are assigned from the order of the input, so the `n`th city
/// always gets `StationIndex(n)`.
///
/// # Examples
///
/// ```
/// use fare_matrix::domain::{Route, StationIndex};
///
/// let route = Route::new(["Dhaka", "Airport", "Chattogram"]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.get(StationIndex(2)).unwrap().city, "Chattogram");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    stations: Vec<Station>,
}

impl Route {
    /// Build a route from cities in travel order.
    pub fn new<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stations = cities
            .into_iter()
            .enumerate()
            .map(|(i, city)| Station {
                index: StationIndex(i),
                city: city.into(),
            })
            .collect();

        Self { stations }
    }

    /// Stations in route order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Look up a station by its route position.
    pub fn get(&self, index: StationIndex) -> Option<&Station> {
        self.stations.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// City names in route order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.stations.iter().map(|s| s.city.as_str())
    }
}
