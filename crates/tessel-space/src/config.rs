//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder-input for [`TileGrid`](crate::TileGrid).
//! [`validate()`](GridConfig::validate) checks structural invariants;
//! `TileGrid::new` calls it before constructing anything.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use tessel_core::Topology;

/// Configuration for a bounded [`TileGrid`](crate::TileGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of columns. Default: 64.
    pub width: u32,
    /// Number of rows. Default: 64.
    pub height: u32,
    /// Adjacency rule set. Default: checkerboard.
    pub topology: Topology,
    /// Border handling. Default: absorb.
    pub edge: EdgeBehavior,
}

impl GridConfig {
    /// Largest allowed dimension: points use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Check structural invariants.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0 and
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn validate(&self) -> Result<(), SpaceError> {
        if self.width == 0 || self.height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            topology: Topology::Checkerboard,
            edge: EdgeBehavior::Absorb,
        }
    }
}
