//! Text rendering of fare matrices.
//!
//! Each seat type with any availability becomes a banner followed by one
//! or more grid tables. Wide routes are split into groups of destination
//! columns so that each table fits a terminal; every group repeats the
//! origin label column.

mod grid;

use std::ops::Range;
use std::str::FromStr;

use crate::domain::{DomainError, SeatType, SeatTypeInfo};
use crate::matrix::FareMatrix;

pub use grid::{Align, grid_table};

/// Default number of destination columns per table.
pub const DEFAULT_CHUNK_SIZE: usize = 12;

/// Header of the origin label column.
pub const ROW_LABEL: &str = "From\\To";

/// Printed after all seat types.
pub const SUMMARY_LINE: &str = "Only fare matrices with available seats have been displayed.";

const BANNER_WIDTH: usize = 50;

/// What a visible cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellMetric {
    /// Online plus offline seats.
    #[default]
    Seats,
    /// Fare for the seat type on that pair.
    Fare,
}

impl FromStr for CellMetric {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seats" => Ok(CellMetric::Seats),
            "fare" => Ok(CellMetric::Fare),
            _ => Err(DomainError::UnknownCellMetric(s.to_string())),
        }
    }
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Destination columns per table. Always at least 1.
    pub chunk_size: usize,
    pub metric: CellMetric,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            metric: CellMetric::Seats,
        }
    }

    /// Set the column group size. Zero is treated as one.
    pub fn with_chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n.max(1);
        self
    }

    pub fn with_metric(mut self, metric: CellMetric) -> Self {
        self.metric = metric;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `columns` data columns into consecutive groups of `chunk_size`.
///
/// Yields `ceil(columns / chunk_size)` ranges; the last may be shorter.
pub fn column_chunks(columns: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let size = chunk_size.max(1);
    (0..columns)
        .step_by(size)
        .map(|start| start..(start + size).min(columns))
        .collect()
}

/// Text of one cell, blank for non-forward pairs and pairs without seats.
fn cell_text(info: Option<SeatTypeInfo>, metric: CellMetric) -> String {
    match info {
        Some(info) if info.total() > 0 => match metric {
            CellMetric::Seats => info.total().to_string(),
            CellMetric::Fare => format_fare(info.fare),
        },
        _ => String::new(),
    }
}

fn format_fare(fare: f64) -> String {
    if fare.fract() == 0.0 {
        format!("{fare:.0}")
    } else {
        format!("{fare:.2}")
    }
}

/// Render one seat type, or `None` if no forward pair has a seat.
pub fn render_seat_type(
    matrix: &FareMatrix,
    seat: SeatType,
    config: &RenderConfig,
) -> Option<String> {
    if !matrix.has_availability(seat) {
        return None;
    }

    let stations = matrix.route().stations();

    let rows: Vec<Vec<String>> = stations
        .iter()
        .map(|origin| {
            stations
                .iter()
                .map(|destination| {
                    // Only forward cells are looked up.
                    let info = origin
                        .index
                        .precedes(destination.index)
                        .then(|| matrix.get(seat, origin.index, destination.index))
                        .flatten();
                    cell_text(info, config.metric)
                })
                .collect()
        })
        .collect();

    let rule = "-".repeat(BANNER_WIDTH);
    let mut out = format!("{rule}\nFare Matrix Representation for Seat Type: {seat}\n{rule}\n");

    for chunk in column_chunks(stations.len(), config.chunk_size) {
        let mut header = vec![ROW_LABEL.to_string()];
        header.extend(stations[chunk.clone()].iter().map(|s| s.city.clone()));

        let body: Vec<Vec<String>> = stations
            .iter()
            .zip(&rows)
            .map(|(origin, cells)| {
                let mut line = vec![origin.city.clone()];
                line.extend(cells[chunk.clone()].iter().cloned());
                line
            })
            .collect();

        let mut align = vec![Align::Left];
        align.extend(std::iter::repeat_n(Align::Right, chunk.len()));

        out.push_str(&grid_table(&header, &body, &align));
        out.push('\n');
    }

    Some(out)
}

/// Render every seat type with availability, then the summary line.
pub fn render_matrix(matrix: &FareMatrix, config: &RenderConfig) -> String {
    let mut out = String::new();

    for seat in visible_seat_types(matrix) {
        if let Some(block) = render_seat_type(matrix, seat, config) {
            out.push('\n');
            out.push_str(&block);
        }
    }

    out.push('\n');
    out.push_str(SUMMARY_LINE);
    out.push('\n');
    out
}

/// Seat types that would be rendered, in display order.
pub fn visible_seat_types(matrix: &FareMatrix) -> Vec<SeatType> {
    SeatType::ALL
        .into_iter()
        .filter(|seat| matrix.has_availability(*seat))
        .collect()
}
