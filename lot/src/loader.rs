use crate::error::{Error, Malformed};
use crate::{parser, CarType, LineNumber, LotGrid, PlateNumber, Vehicle, SECTIONER};
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::{debug, info, warn};

const RECORD_FIELDS: usize = 4;

/// A parking record that was skipped while loading. Loading carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The record was readable but the car is not allowed in that spot.
    Rejected {
        line: LineNumber,
        row: i64,
        column: i64,
        plate: PlateNumber,
    },
    /// The record has four fields but one of them makes no sense.
    Unreadable { line: LineNumber, reason: String },
}
impl Diagnostic {
    pub fn line(&self) -> LineNumber {
        match self {
            Self::Rejected { line, .. } | Self::Unreadable { line, .. } => *line,
        }
    }
}
impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { row, column, plate, .. } => {
                write!(f, "Car {plate} cannot be parked at ({row}, {column})")
            },
            Self::Unreadable { line, reason } => write!(f, "Skipping line {line}: {reason}"),
        }
    }
}

type DesignRow<'a> = (LineNumber, Vec<&'a str>);

/// Builds a lot from its text description, logging any parking record that
/// had to be skipped.
pub fn load(text: &str) -> Result<LotGrid, Error> {
    load_with_diagnostics(text).map(|(lot, _)| lot)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<LotGrid, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lot = load(&text)?;
    info!(
        "Loaded lot from {}: {} spots, {} taken.",
        path.display(),
        lot.total_capacity(),
        lot.total_occupancy()
    );
    Ok(lot)
}

/// Same as [`load`], but also hands back every skipped parking record.
pub fn load_with_diagnostics(text: &str) -> Result<(LotGrid, Vec<Diagnostic>), Error> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let mut design_rows: Vec<DesignRow> = Vec::new();
    let mut sectioned = false;
    for (number, line) in lines.by_ref() {
        if line == SECTIONER {
            sectioned = true;
            break;
        }
        design_rows.push((number, parser::fields(line)));
    }
    if !sectioned {
        return Err(Malformed::MissingDelimiter.into());
    }

    let mut lot = build_design(design_rows)?;
    let mut diagnostics = Vec::new();
    for (number, line) in lines {
        if line == SECTIONER {
            continue;
        }
        if let Err(diagnostic) = replay(&mut lot, number, line) {
            warn!(line = diagnostic.line(), "{diagnostic}");
            diagnostics.push(diagnostic);
        }
    }
    Ok((lot, diagnostics))
}

fn build_design(rows: Vec<DesignRow>) -> Result<LotGrid, Error> {
    let Some((_, first)) = rows.first() else {
        return Err(Malformed::EmptyDesign.into());
    };
    // Later rows are trusted to be as wide as the first one.
    let cols = first.len();
    let design = rows
        .into_iter()
        .map(|(line, fields)| {
            fields
                .into_iter()
                .take(cols)
                .map(|label| spot_category(line, label))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LotGrid::new(design))
}

fn spot_category(line: LineNumber, label: &str) -> Result<CarType, Malformed> {
    if label.is_empty() {
        return Ok(CarType::Na);
    }
    label.parse().map_err(|()| Malformed::UnknownLabel {
        line,
        label: label.to_owned(),
    })
}

/// Parks the car described by one line of the occupancy section. Lines that
/// are not four fields long are not parking records and are ignored.
fn replay(lot: &mut LotGrid, line: LineNumber, record: &str) -> Result<(), Diagnostic> {
    let fields = parser::fields(record);
    let &[row, column, label, plate] = fields.as_slice() else {
        debug!("Ignoring line {line}, expected {RECORD_FIELDS} fields but found {}.", fields.len());
        return Ok(());
    };
    let unreadable = |reason: String| Diagnostic::Unreadable { line, reason };

    let row = parser::coordinate(row).ok_or_else(|| unreadable(format!("row `{row}` is not a number")))?;
    let column = parser::coordinate(column).ok_or_else(|| unreadable(format!("column `{column}` is not a number")))?;
    let category: CarType = label
        .parse()
        .map_err(|()| unreadable(format!("`{label}` is not a car category")))?;
    let vehicle = Vehicle::new(category, plate).map_err(|e| unreadable(e.to_string()))?;

    let rejected = || Diagnostic::Rejected {
        line,
        row,
        column,
        plate: plate.to_owned(),
    };
    let (Ok(i), Ok(j)) = (usize::try_from(row), usize::try_from(column)) else {
        return Err(rejected());
    };
    lot.park(i, j, vehicle).map_err(|_| rejected())
}

#[cfg(test)]
mod tests {
    use super::{load, load_with_diagnostics, Diagnostic};
    use crate::error::{Error, Malformed};
    use crate::CarType;

    #[test]
    fn test_scenario_rejected_record() {
        let (lot, diagnostics) = load_with_diagnostics("S,R\nL,N\n###\n0,0,R,\"ABC123\"\n").expect("Input is valid.");
        assert_eq!(None, lot.vehicle_at(0, 0));
        assert_eq!(0, lot.total_occupancy());
        assert_eq!(
            vec![Diagnostic::Rejected {
                line: 4,
                row: 0,
                column: 0,
                plate: "\"ABC123\"".to_owned(),
            }],
            diagnostics
        );
        assert_eq!("Car \"ABC123\" cannot be parked at (0, 0)", diagnostics[0].to_string());
    }

    #[test]
    fn test_dimensions_from_first_row() {
        let lot = load("\nS, R, L\n\nR\nE,E,E,E,E\n###\n").expect("Input is valid.");
        assert_eq!((3, 3), (lot.rows(), lot.cols()));
        assert_eq!(Some(CarType::Na), lot.spot(1, 2));
        assert_eq!(Some(CarType::Electric), lot.spot(2, 2));
        assert_eq!(None, lot.spot(2, 3));
        assert_eq!(7, lot.total_capacity());
    }

    #[test]
    fn test_trailing_empty_field_counts_as_column() {
        let lot = load("S,R,\n###\n").expect("Input is valid.");
        assert_eq!(3, lot.cols());
        assert_eq!(Some(CarType::Na), lot.spot(0, 2));
    }

    #[test]
    fn test_truncated_labels_are_not_checked() {
        let lot = load("S\nR,Q\n###\n").expect("Extra fields are dropped before reading.");
        assert_eq!(Some(CarType::Regular), lot.spot(1, 0));
    }

    #[test]
    fn test_missing_delimiter() {
        assert!(matches!(load("S,R\nL,N\n"), Err(Error::MalformedInput(Malformed::MissingDelimiter))));
        assert!(matches!(load(""), Err(Error::MalformedInput(Malformed::MissingDelimiter))));
    }

    #[test]
    fn test_empty_design() {
        assert!(matches!(load("\n###\n0,0,S,A\n"), Err(Error::MalformedInput(Malformed::EmptyDesign))));
    }

    #[test]
    fn test_unknown_label() {
        match load("S,R\nL,X\n###\n") {
            Err(Error::MalformedInput(malformed)) => assert_eq!(
                Malformed::UnknownLabel {
                    line: 2,
                    label: "X".to_owned()
                },
                malformed
            ),
            _ => panic!("Unknown label should have failed the load."),
        }
    }

    #[test]
    fn test_records_parked_in_order() {
        let text = "L,L\n###\n0,0,S,FIRST\n0,0,R,SECOND\n0,1,E,THIRD\n";
        let (lot, diagnostics) = load_with_diagnostics(text).expect("Input is valid.");
        assert_eq!(2, lot.total_occupancy());
        assert_eq!(Some("FIRST"), lot.vehicle_at(0, 0).map(|vehicle| vehicle.plate()));
        assert_eq!(1, diagnostics.len());
        assert_eq!(4, diagnostics[0].line());
    }

    #[test]
    fn test_other_field_counts_ignored() {
        let text = "L,L\n###\n0,0,S\n0,1,S,A,B\nnonsense\n###\n0,1,S,KEPT\n";
        let (lot, diagnostics) = load_with_diagnostics(text).expect("Input is valid.");
        assert!(diagnostics.is_empty());
        assert_eq!(1, lot.total_occupancy());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let text = "L,L\n###\nx,0,S,A\n0,0,Q,B\n0,0,N,C\n-1,0,S,D\n0,9,S,E\n0,0,S,F\n";
        let (lot, diagnostics) = load_with_diagnostics(text).expect("Input is valid.");
        assert_eq!(1, lot.total_occupancy());
        assert_eq!(5, diagnostics.len());
        assert!(matches!(diagnostics[0], Diagnostic::Unreadable { line: 3, .. }));
        assert!(matches!(diagnostics[1], Diagnostic::Unreadable { line: 4, .. }));
        assert!(matches!(diagnostics[2], Diagnostic::Unreadable { line: 5, .. }));
        assert!(matches!(diagnostics[3], Diagnostic::Rejected { row: -1, column: 0, .. }));
        assert!(matches!(diagnostics[4], Diagnostic::Rejected { row: 0, column: 9, .. }));
    }
}
