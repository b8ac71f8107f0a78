use crate::error::Error;
use crate::{rules, CarType, Vehicle, UNOCCUPIED};
use std::fmt::{Display, Formatter};
use tracing::debug;

/// A parking lot laid out as `rows × cols` spots.
///
/// The design (which category each spot is) is fixed when the grid is built.
/// Only occupancy changes afterwards, and only through [`LotGrid::park`] and
/// [`LotGrid::remove`]. Both matrices are stored row-major.
#[derive(Debug, Clone)]
pub struct LotGrid {
    rows: usize,
    cols: usize,
    design: Box<[CarType]>,
    occupancy: Vec<Option<Vehicle>>,
}
impl LotGrid {
    /// Builds an empty lot from design rows.
    ///
    /// The first row decides how many spots every row has: shorter rows are
    /// padded with [`CarType::Na`], longer rows are truncated.
    pub fn new(design: Vec<Vec<CarType>>) -> Self {
        let rows = design.len();
        let cols = design.first().map_or(0, Vec::len);
        let design: Box<[CarType]> = design
            .into_iter()
            .flat_map(|row| row.into_iter().chain(std::iter::repeat(CarType::Na)).take(cols))
            .collect();
        debug!("Built {rows}x{cols} lot.");
        Self {
            rows,
            cols,
            design,
            occupancy: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.cols).then(|| row * self.cols + column)
    }

    /// Category of the spot at `(row, column)`, if it is inside the lot.
    pub fn spot(&self, row: usize, column: usize) -> Option<CarType> {
        self.index(row, column).map(|index| self.design[index])
    }

    pub fn vehicle_at(&self, row: usize, column: usize) -> Option<&Vehicle> {
        self.index(row, column).and_then(|index| self.occupancy[index].as_ref())
    }

    pub fn can_park_at(&self, row: usize, column: usize, vehicle: &Vehicle) -> bool {
        match self.index(row, column) {
            Some(index) if self.occupancy[index].is_none() => {
                rules::can_park(self.design[index], vehicle.category())
            },
            _ => false,
        }
    }

    /// Parks `vehicle` at `(row, column)`.
    ///
    /// Out of bounds, already taken and wrong category are all reported as
    /// [`Error::InvalidPlacement`], which hands the vehicle back.
    pub fn park(&mut self, row: usize, column: usize, vehicle: Vehicle) -> Result<(), Error> {
        match self.index(row, column) {
            Some(index) if self.can_park_at(row, column, &vehicle) => {
                self.occupancy[index] = Some(vehicle);
                Ok(())
            },
            _ => Err(Error::InvalidPlacement { row, column, vehicle }),
        }
    }

    /// Takes the vehicle out of `(row, column)`. Returns `None` when the spot
    /// is outside the lot or already empty.
    pub fn remove(&mut self, row: usize, column: usize) -> Option<Vehicle> {
        let index = self.index(row, column)?;
        self.occupancy[index].take()
    }

    /// Number of spots a car could ever park in.
    pub fn total_capacity(&self) -> usize {
        self.design.iter().filter(|spot| spot.is_usable()).count()
    }

    pub fn total_occupancy(&self) -> usize {
        self.occupancy.iter().filter(|spot| spot.is_some()).count()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}
impl Display for LotGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "==== Lot Design ====")?;
        for row in 0..self.rows {
            let labels = self.design[row * self.cols..(row + 1) * self.cols]
                .iter()
                .map(CarType::to_string)
                .collect::<Vec<_>>();
            writeln!(f, "{}", labels.join(", "))?;
        }
        writeln!(f)?;
        writeln!(f, "==== Parking Occupancy ====")?;
        for row in 0..self.rows {
            for column in 0..self.cols {
                match self.vehicle_at(row, column) {
                    Some(vehicle) => writeln!(f, "({row}, {column}): {vehicle}")?,
                    None => writeln!(f, "({row}, {column}): {UNOCCUPIED}")?,
                }
            }
        }
        Ok(())
    }
}
