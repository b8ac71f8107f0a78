pub use crate::error::{Error, Malformed};
pub use crate::grid::LotGrid;
pub use crate::loader::{load, load_file, load_with_diagnostics, Diagnostic};
pub use crate::models::{CarType, Vehicle};
pub use crate::rules::can_park;

mod error;
mod grid;
mod loader;
mod models;
mod parser;
mod rules;

/// Separates the fields of a single line.
pub(crate) const SEPARATOR: char = ',';
/// Separates the lot design section from the parked cars section.
pub(crate) const SECTIONER: &str = "###";
/// Shown in the occupancy report for a spot with no car in it.
pub(crate) const UNOCCUPIED: &str = "Unoccupied";

pub(crate) type PlateNumber = String;
pub(crate) type LineNumber = usize;
