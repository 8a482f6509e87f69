//! Grid points and the two axis flips.

use crate::offset::Offset;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A coordinate on the grid: +x is east, +y is south.
///
/// No range constraint applies; bounds are the business of whatever grid
/// the point is used with. Negation and arithmetic wrap at the `i32`
/// limits, so `i32::MIN` flips to itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column, increasing eastwards.
    pub x: i32,
    /// Row, increasing southwards.
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Create a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Negate x. Applying it twice restores the point.
    #[must_use]
    pub const fn flip_x(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y)
    }

    /// Negate y. Applying it twice restores the point.
    #[must_use]
    pub const fn flip_y(self) -> Self {
        Self::new(self.x, self.y.wrapping_neg())
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x.wrapping_add(rhs.dx()), self.y.wrapping_add(rhs.dy()))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.flip_x().flip_y()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flips_touch_one_axis() {
        let p = Point::new(3, -2);
        assert_eq!(p.flip_x(), Point::new(-3, -2));
        assert_eq!(p.flip_y(), Point::new(3, 2));
        assert_eq!(-p, Point::new(-3, 2));
    }

    #[test]
    fn arithmetic() {
        let a = Point::new(4, 7);
        let b = Point::new(-1, 2);
        assert_eq!(a + b, Point::new(3, 9));
        assert_eq!(a - b, Point::new(5, 5));
        assert_eq!(a + Offset::NORTH_WEST, Point::new(3, 6));
    }

    #[test]
    fn flips_wrap_at_the_limits() {
        let min = Point::new(i32::MIN, i32::MIN);
        assert_eq!(min.flip_x(), min);
        assert_eq!(min.flip_y(), min);
        assert_eq!(-min, min);
        let max = Point::new(i32::MAX, i32::MAX);
        assert_eq!(max.flip_x(), Point::new(i32::MIN + 1, i32::MAX));
        assert_eq!(max.flip_x().flip_x(), max);
    }

    #[test]
    fn arithmetic_wraps_at_the_limits() {
        let max = Point::new(i32::MAX, 0);
        assert_eq!(max + Offset::EAST, Point::new(i32::MIN, 0));
        assert_eq!(Point::new(i32::MIN, 0) - Point::new(1, 0), max);
        assert_eq!(Point::new(0, i32::MIN) + Point::new(0, -1), Point::new(0, i32::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(3, -2).to_string(), "(3, -2)");
    }

    proptest! {
        #[test]
        fn flip_x_is_involution(x in any::<i32>(), y in any::<i32>()) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.flip_x().flip_x(), p);
        }

        #[test]
        fn flip_y_is_involution(x in any::<i32>(), y in any::<i32>()) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.flip_y().flip_y(), p);
        }

        #[test]
        fn flips_commute(x in any::<i32>(), y in any::<i32>()) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.flip_x().flip_y(), p.flip_y().flip_x());
        }
    }
}
