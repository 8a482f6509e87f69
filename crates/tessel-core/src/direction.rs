//! Compass directions and the two named subsets of them.
//!
//! [`Direction`] is the full 8-symbol vocabulary. [`StaggeredDirection`]
//! is the 6-symbol subset that has a neighbour under the staggered
//! topology, and [`Corner`] is the 4-symbol diagonal subset used as a
//! reflection frame. The subsets are separate types so that callers who
//! hold one can never pass an illegal value; conversions from the full
//! vocabulary are fallible.

use crate::error::IllegalArgument;
use std::fmt;
use std::str::FromStr;

/// One of the 8 compass directions, in fixed cyclic (clockwise) order.
///
/// The ordinal of each symbol is stable, but it is never an offset: use
/// the resolvers in `tessel-space` to turn a direction into a
/// displacement.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up the screen, towards decreasing y.
    North = 0,
    /// Up and to the right.
    NorthEast = 1,
    /// Towards increasing x.
    East = 2,
    /// Down and to the right.
    SouthEast = 3,
    /// Down the screen, towards increasing y.
    South = 4,
    /// Down and to the left.
    SouthWest = 5,
    /// Towards decreasing x.
    West = 6,
    /// Up and to the left.
    NorthWest = 7,
}

impl Direction {
    /// All 8 directions in cyclic order, starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Position in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotate_cw(4)
    }

    /// Rotate clockwise by `steps` eighths of a turn.
    #[must_use]
    pub const fn rotate_cw(self, steps: u8) -> Self {
        Self::ALL[(self as usize + (steps % 8) as usize) % 8]
    }

    /// Rotate counter-clockwise by `steps` eighths of a turn.
    #[must_use]
    pub const fn rotate_ccw(self, steps: u8) -> Self {
        Self::ALL[(self as usize + 8 - (steps % 8) as usize) % 8]
    }

    /// `true` for the four diagonal directions.
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::SouthEast | Self::SouthWest | Self::NorthWest
        )
    }

    /// `true` for north, east, south and west.
    pub const fn is_cardinal(self) -> bool {
        !self.is_corner()
    }

    /// Upper-case compass name, e.g. `"NORTHEAST"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::NorthEast => "NORTHEAST",
            Self::East => "EAST",
            Self::SouthEast => "SOUTHEAST",
            Self::South => "SOUTH",
            Self::SouthWest => "SOUTHWEST",
            Self::West => "WEST",
            Self::NorthWest => "NORTHWEST",
        }
    }

    /// Compass abbreviation, e.g. `"NE"`.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = IllegalArgument;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(IllegalArgument::DirectionIndex { index })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction {:?}", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names and abbreviations in any case: `"north"`,
    /// `"NorthEast"`, `"SE"`, `"w"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| {
                trimmed.eq_ignore_ascii_case(d.name())
                    || trimmed.eq_ignore_ascii_case(d.abbreviation())
            })
            .ok_or_else(|| ParseDirectionError {
                input: s.to_owned(),
            })
    }
}

/// A direction that has a neighbour under the staggered topology.
///
/// North and south are absent: in a row-staggered grid there is no
/// single same-column cell directly above or below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaggeredDirection {
    /// Up and to the right.
    NorthEast,
    /// Same row, to the right.
    East,
    /// Down and to the right.
    SouthEast,
    /// Down and to the left.
    SouthWest,
    /// Same row, to the left.
    West,
    /// Up and to the left.
    NorthWest,
}

impl StaggeredDirection {
    /// All 6 staggered directions in cyclic order.
    pub const ALL: [StaggeredDirection; 6] = [
        StaggeredDirection::NorthEast,
        StaggeredDirection::East,
        StaggeredDirection::SouthEast,
        StaggeredDirection::SouthWest,
        StaggeredDirection::West,
        StaggeredDirection::NorthWest,
    ];

    /// The same direction in the full vocabulary.
    pub const fn direction(self) -> Direction {
        match self {
            Self::NorthEast => Direction::NorthEast,
            Self::East => Direction::East,
            Self::SouthEast => Direction::SouthEast,
            Self::SouthWest => Direction::SouthWest,
            Self::West => Direction::West,
            Self::NorthWest => Direction::NorthWest,
        }
    }

    /// The staggered direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

impl From<StaggeredDirection> for Direction {
    fn from(d: StaggeredDirection) -> Self {
        d.direction()
    }
}

impl TryFrom<Direction> for StaggeredDirection {
    type Error = IllegalArgument;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::NorthEast => Ok(Self::NorthEast),
            Direction::East => Ok(Self::East),
            Direction::SouthEast => Ok(Self::SouthEast),
            Direction::SouthWest => Ok(Self::SouthWest),
            Direction::West => Ok(Self::West),
            Direction::NorthWest => Ok(Self::NorthWest),
            Direction::North | Direction::South => Err(IllegalArgument::Direction {
                direction,
                topology: crate::Topology::Staggered,
            }),
        }
    }
}

impl fmt::Display for StaggeredDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.direction(), f)
    }
}

/// A diagonal reference corner for point reflection.
///
/// South-east is the canonical frame; the other three are reached by
/// flipping one or both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Corner {
    /// The reference frame: no flips.
    SouthEast,
    /// Y flipped.
    NorthEast,
    /// X flipped.
    SouthWest,
    /// Both axes flipped.
    NorthWest,
}

impl Corner {
    /// All 4 corners, reference corner first.
    pub const ALL: [Corner; 4] = [
        Corner::SouthEast,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::NorthWest,
    ];

    /// The same corner in the full vocabulary.
    pub const fn direction(self) -> Direction {
        match self {
            Self::SouthEast => Direction::SouthEast,
            Self::NorthEast => Direction::NorthEast,
            Self::SouthWest => Direction::SouthWest,
            Self::NorthWest => Direction::NorthWest,
        }
    }

    /// Whether reflecting into this corner negates x.
    pub const fn flips_x(self) -> bool {
        matches!(self, Self::SouthWest | Self::NorthWest)
    }

    /// Whether reflecting into this corner negates y.
    pub const fn flips_y(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }
}

impl From<Corner> for Direction {
    fn from(c: Corner) -> Self {
        c.direction()
    }
}

impl TryFrom<Direction> for Corner {
    type Error = IllegalArgument;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::SouthEast => Ok(Self::SouthEast),
            Direction::NorthEast => Ok(Self::NorthEast),
            Direction::SouthWest => Ok(Self::SouthWest),
            Direction::NorthWest => Ok(Self::NorthWest),
            _ => Err(IllegalArgument::Corner { direction }),
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.direction(), f)
    }
}
