use crate::{CarType, LineNumber, Vehicle, SECTIONER};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed lot description: {0}")]
    MalformedInput(#[from] Malformed),
    #[error("car {vehicle} cannot be parked at ({row}, {column})")]
    InvalidPlacement { row: usize, column: usize, vehicle: Vehicle },
    #[error("`{0}` is not a category a car can have")]
    UnusableCategory(CarType),
    #[error("could not read lot file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a lot description could not be turned into a grid.
#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Malformed {
    #[error("section delimiter `{}` not found", SECTIONER)]
    MissingDelimiter,
    #[error("design section has no rows")]
    EmptyDesign,
    #[error("unknown spot label `{label}` on line {line}")]
    UnknownLabel { line: LineNumber, label: String },
}
