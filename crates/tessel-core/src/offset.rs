//! Validated single-cell displacements.

use crate::error::IllegalArgument;
use crate::point::Point;
use std::fmt;

/// A unit displacement `(dx, dy)` to one of the 8 surrounding cells.
///
/// Both components lie in `{-1, 0, 1}` and they are never both zero.
/// The fields are private so that every `Offset` in existence satisfies
/// that invariant; build one with [`Offset::new`] or take a named
/// constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    dx: i8,
    dy: i8,
}

impl Offset {
    /// `(0, -1)`.
    pub const NORTH: Offset = Offset::unit(0, -1);
    /// `(1, -1)`.
    pub const NORTH_EAST: Offset = Offset::unit(1, -1);
    /// `(1, 0)`.
    pub const EAST: Offset = Offset::unit(1, 0);
    /// `(1, 1)`.
    pub const SOUTH_EAST: Offset = Offset::unit(1, 1);
    /// `(0, 1)`.
    pub const SOUTH: Offset = Offset::unit(0, 1);
    /// `(-1, 1)`.
    pub const SOUTH_WEST: Offset = Offset::unit(-1, 1);
    /// `(-1, 0)`.
    pub const WEST: Offset = Offset::unit(-1, 0);
    /// `(-1, -1)`.
    pub const NORTH_WEST: Offset = Offset::unit(-1, -1);

    const fn unit(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// Validate a displacement.
    ///
    /// Fails with [`IllegalArgument::Offset`] if either component is
    /// outside `{-1, 0, 1}` or both are zero.
    pub const fn new(dx: i32, dy: i32) -> Result<Self, IllegalArgument> {
        let in_range = dx >= -1 && dx <= 1 && dy >= -1 && dy <= 1;
        if !in_range || (dx == 0 && dy == 0) {
            return Err(IllegalArgument::Offset { dx, dy });
        }
        Ok(Self::unit(dx as i8, dy as i8))
    }

    /// Column component.
    pub const fn dx(self) -> i32 {
        self.dx as i32
    }

    /// Row component.
    pub const fn dy(self) -> i32 {
        self.dy as i32
    }

    /// The displacement pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::unit(-self.dx, -self.dy)
    }

    /// The offset as a point.
    pub const fn to_point(self) -> Point {
        Point::new(self.dx(), self.dy())
    }
}

impl TryFrom<Point> for Offset {
    type Error = IllegalArgument;

    fn try_from(p: Point) -> Result<Self, Self::Error> {
        Self::new(p.x, p.y)
    }
}

impl From<Offset> for Point {
    fn from(o: Offset) -> Self {
        o.to_point()
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}
