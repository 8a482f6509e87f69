//! Grid adjacency rule sets.

use crate::direction::Direction;
use std::fmt;

const STAGGERED_DIRECTIONS: [Direction; 6] = [
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

/// The adjacency rule set of a grid.
///
/// Supplied per call to the resolvers; nothing in the workspace keeps a
/// global topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Square cells with 8 king-move neighbours.
    #[default]
    Checkerboard,
    /// Alternate rows offset by half a cell; 6 neighbours, no north or
    /// south.
    Staggered,
}

impl Topology {
    /// Map the legacy boolean flag onto a topology.
    pub const fn from_staggered(staggered: bool) -> Self {
        if staggered {
            Self::Staggered
        } else {
            Self::Checkerboard
        }
    }

    /// `true` for [`Topology::Staggered`].
    pub const fn is_staggered(self) -> bool {
        matches!(self, Self::Staggered)
    }

    /// Number of neighbours an interior cell has.
    pub const fn neighbour_count(self) -> usize {
        self.directions().len()
    }

    /// The legal directions, in cyclic order.
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Checkerboard => &Direction::ALL,
            Self::Staggered => &STAGGERED_DIRECTIONS,
        }
    }

    /// Whether `direction` has a neighbour under this topology.
    pub const fn is_legal(self, direction: Direction) -> bool {
        match self {
            Self::Checkerboard => true,
            Self::Staggered => !matches!(direction, Direction::North | Direction::South),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkerboard => f.write_str("checkerboard"),
            Self::Staggered => f.write_str("staggered"),
        }
    }
}
