//! Forward station pair generation.

use std::fmt;

use crate::domain::{Route, Station};

/// An origin-destination pair in travel direction.
///
/// Only constructed by [`forward_pairs`], so `origin` always precedes
/// `destination` on the route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StationPair {
    pub origin: Station,
    pub destination: Station,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Every forward pair of the route, origin-major.
///
/// A route of `n` stations yields `n * (n - 1) / 2` pairs.
pub fn forward_pairs(route: &Route) -> Vec<StationPair> {
    let stations = route.stations();
    let mut pairs = Vec::with_capacity(pair_count(stations.len()));

    for (i, origin) in stations.iter().enumerate() {
        for destination in &stations[i + 1..] {
            pairs.push(StationPair {
                origin: origin.clone(),
                destination: destination.clone(),
            });
        }
    }

    pairs
}

/// Number of forward pairs on a route of `stations` stations.
pub fn pair_count(stations: usize) -> usize {
    stations * stations.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &[StationPair]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|p| (p.origin.city.clone(), p.destination.city.clone()))
            .collect()
    }

    #[test]
    fn three_stations() {
        let route = Route::new(["A", "B", "C"]);
        let pairs = forward_pairs(&route);

        assert_eq!(
            names(&pairs),
            vec![
                ("A".to_string(), "B".to_string()),
                ("A".to_string(), "C".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn degenerate_routes_have_no_pairs() {
        assert!(forward_pairs(&Route::default()).is_empty());
        assert!(forward_pairs(&Route::new(["Solo"])).is_empty());
    }

    #[test]
    fn display() {
        let pairs = forward_pairs(&Route::new(["Dhaka", "Khulna"]));
        assert_eq!(pairs[0].to_string(), "Dhaka -> Khulna");
    }
}
