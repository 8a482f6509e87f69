//! The single geometric error kind.
//!
//! Every geometric operation in the workspace is a total function over
//! its legal domain and fails fast outside it. The variants below record
//! which argument fell outside its domain; they all mean "illegal
//! argument" and none of them is recoverable by retrying.

use crate::direction::Direction;
use crate::topology::Topology;
use std::error::Error;
use std::fmt;

/// An argument outside the legal domain of a geometric operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalArgument {
    /// A raw direction ordinal outside `0..=7`.
    DirectionIndex {
        /// The rejected ordinal.
        index: u8,
    },
    /// The direction has no neighbour under the requested topology.
    Direction {
        /// The rejected direction.
        direction: Direction,
        /// The topology it was requested under.
        topology: Topology,
    },
    /// The displacement is not one of the 8 unit offsets.
    Offset {
        /// Column component of the rejected displacement.
        dx: i32,
        /// Row component of the rejected displacement.
        dy: i32,
    },
    /// A non-diagonal direction was used as a reflection corner.
    Corner {
        /// The rejected direction.
        direction: Direction,
    },
    /// An offset-to-direction lookup was requested under a topology that
    /// defines no inverse.
    NoInverse {
        /// The topology without an inverse.
        topology: Topology,
    },
}

impl fmt::Display for IllegalArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectionIndex { index } => {
                write!(f, "illegal argument: direction index {index} is not in 0..=7")
            }
            Self::Direction {
                direction,
                topology,
            } => write!(
                f,
                "illegal argument: {direction} has no neighbour under {topology} topology"
            ),
            Self::Offset { dx, dy } => {
                write!(f, "illegal argument: ({dx}, {dy}) is not a unit offset")
            }
            Self::Corner { direction } => {
                write!(f, "illegal argument: {direction} is not a corner")
            }
            Self::NoInverse { topology } => write!(
                f,
                "illegal argument: {topology} topology has no offset-to-direction inverse"
            ),
        }
    }
}

impl Error for IllegalArgument {}
