//! Schedule document DTOs.
//!
//! One JSON document per train, as produced by the schedule
//! pre-processing step. Only the fields the matrix needs are mapped.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDocument {
    pub data: ScheduleData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleData {
    /// Train identifier, e.g. "707".
    pub train_model: String,

    /// Display name, e.g. "TISTA EXPRESS (707)".
    #[serde(default)]
    pub train_name: String,

    /// Running days as abbreviations ("Mon", "Tue", ...).
    #[serde(default)]
    pub days: Vec<String>,

    /// Stops in travel order.
    #[serde(default)]
    pub routes: Vec<RouteStop>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteStop {
    pub city: String,
}
