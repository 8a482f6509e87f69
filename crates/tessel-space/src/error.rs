//! Error types for grid construction and grid queries.

use std::error::Error;
use std::fmt;
use tessel_core::{IllegalArgument, Point};

/// Errors arising from grid construction or grid queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A point is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending point.
        point: Point,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum allowed value.
    DimensionTooLarge {
        /// Which dimension (e.g. "width", "height").
        name: &'static str,
        /// The value that was provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A geometric argument was outside its legal domain.
    Geometry(IllegalArgument),
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { point, bounds } => {
                write!(f, "point {point} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::Geometry(e) => write!(f, "geometry: {e}"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IllegalArgument> for SpaceError {
    fn from(e: IllegalArgument) -> Self {
        Self::Geometry(e)
    }
}
