//! Seat availability matrix for one train on one date.
//!
//! Answers: "for every pair of stations this train serves, how many seats
//! of each class are still for sale?" The route comes from a local
//! schedule store; availability comes from one trip search per forward
//! station pair, run with a bounded worker budget.

pub mod domain;
pub mod matrix;
pub mod render;
pub mod schedule;
pub mod shohoz;
