//! Corner-relative point reflection.
//!
//! Geometry is stored relative to the south-east corner and projected
//! onto the other three corners by negating x for the western corners
//! and y for the northern ones. The two flips are independent
//! involutions on [`Point`]; the functions here only decide which of them
//! to apply.

use tessel_core::{Corner, Direction, IllegalArgument, Point};
use tracing::trace;

/// Reflect a south-east-relative `point` into the frame of `corner`.
///
/// # Examples
///
/// ```
/// use tessel_space::{reflect_to_corner, Corner, Point};
///
/// let p = Point::new(3, -2);
/// assert_eq!(reflect_to_corner(p, Corner::NorthEast), Point::new(3, 2));
/// assert_eq!(reflect_to_corner(p, Corner::SouthWest), Point::new(-3, -2));
/// ```
pub const fn reflect_to_corner(point: Point, corner: Corner) -> Point {
    let mut out = point;
    if corner.flips_x() {
        out = out.flip_x();
    }
    if corner.flips_y() {
        out = out.flip_y();
    }
    out
}

/// [`reflect_to_corner`] for callers holding a plain [`Direction`].
///
/// Fails with [`IllegalArgument::Corner`] unless `corner` is one of the
/// four diagonals.
pub fn reflect_to_direction(point: Point, corner: Direction) -> Result<Point, IllegalArgument> {
    let corner = Corner::try_from(corner)
        .inspect_err(|_| trace!(direction = %corner, "not a reflection corner"))?;
    Ok(reflect_to_corner(point, corner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tessel_test_utils::{arb_corner, arb_point};

    #[test]
    fn concrete_reflections() {
        let p = Point::new(3, -2);
        assert_eq!(reflect_to_corner(p, Corner::SouthEast), p);
        assert_eq!(reflect_to_corner(p, Corner::NorthEast), Point::new(3, 2));
        assert_eq!(reflect_to_corner(p, Corner::SouthWest), Point::new(-3, -2));
        assert_eq!(reflect_to_corner(p, Corner::NorthWest), Point::new(-3, 2));
    }

    #[test]
    fn direction_form_rejects_cardinals() {
        let p = Point::new(1, 1);
        for d in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            assert_eq!(
                reflect_to_direction(p, d),
                Err(IllegalArgument::Corner { direction: d })
            );
        }
    }

    #[test]
    fn direction_form_agrees_with_corner_form() {
        let p = Point::new(-7, 4);
        for c in Corner::ALL {
            assert_eq!(
                reflect_to_direction(p, c.direction()),
                Ok(reflect_to_corner(p, c))
            );
        }
    }

    #[test]
    fn extreme_points_reflect_and_restore() {
        for p in [
            Point::new(i32::MIN, i32::MIN),
            Point::new(i32::MAX, i32::MAX),
            Point::new(i32::MIN, i32::MAX),
            Point::new(i32::MAX, i32::MIN),
        ] {
            for c in Corner::ALL {
                assert_eq!(reflect_to_corner(reflect_to_corner(p, c), c), p, "{p} via {c:?}");
            }
        }
        let min = Point::new(i32::MIN, i32::MIN);
        assert_eq!(reflect_to_corner(min, Corner::NorthWest), min);
    }

    #[test]
    fn reflecting_a_neighbourhood_corner_lands_on_that_corner() {
        // The south-east unit offset reflected into each corner is that
        // corner's own offset.
        let se = Point::new(1, 1);
        assert_eq!(reflect_to_corner(se, Corner::NorthEast), Point::new(1, -1));
        assert_eq!(reflect_to_corner(se, Corner::SouthWest), Point::new(-1, 1));
        assert_eq!(reflect_to_corner(se, Corner::NorthWest), Point::new(-1, -1));
    }

    proptest! {
        #[test]
        fn reflection_is_involution(p in arb_point(), c in arb_corner()) {
            prop_assert_eq!(reflect_to_corner(reflect_to_corner(p, c), c), p);
        }

        #[test]
        fn south_east_is_identity(p in arb_point()) {
            prop_assert_eq!(reflect_to_corner(p, Corner::SouthEast), p);
        }

        #[test]
        fn north_west_composes_the_other_two(p in arb_point()) {
            let via_ne_sw = reflect_to_corner(reflect_to_corner(p, Corner::NorthEast), Corner::SouthWest);
            prop_assert_eq!(reflect_to_corner(p, Corner::NorthWest), via_ne_sw);
        }
    }
}
