use crate::error::Error;
use crate::PlateNumber;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Category of a parking spot, or of a car looking for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarType {
    Small,
    Regular,
    Large,
    Electric,
    /// Not a usable spot. Never the category of a car.
    Na,
}
impl CarType {
    pub const ALL: [CarType; 5] = [Self::Small, Self::Regular, Self::Large, Self::Electric, Self::Na];

    pub fn label(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Regular => 'R',
            Self::Large => 'L',
            Self::Electric => 'E',
            Self::Na => 'N',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'S' => Some(Self::Small),
            'R' => Some(Self::Regular),
            'L' => Some(Self::Large),
            'E' => Some(Self::Electric),
            'N' => Some(Self::Na),
            _ => None,
        }
    }

    pub fn is_usable(self) -> bool {
        self != Self::Na
    }
}
impl Display for CarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
impl TryFrom<char> for CarType {
    type Error = char;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Self::from_label(label).ok_or(label)
    }
}
impl FromStr for CarType {
    type Err = ();

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Self::from_label(label).ok_or(()),
            _ => Err(()),
        }
    }
}

/// A car with a license plate. Cannot be changed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    category: CarType,
    plate: PlateNumber,
}
impl Vehicle {
    pub fn new(category: CarType, plate: impl Into<PlateNumber>) -> Result<Self, Error> {
        if !category.is_usable() {
            return Err(Error::UnusableCategory(category));
        }
        Ok(Self {
            category,
            plate: plate.into(),
        })
    }

    pub fn category(&self) -> CarType {
        self.category
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }
}
impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.category, self.plate)
    }
}
