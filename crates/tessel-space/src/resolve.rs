//! Direction ⇄ offset resolution for both topologies.

use tessel_core::{Direction, IllegalArgument, Offset, Point, StaggeredDirection, Topology};
use tracing::trace;

/// King-move offset for `direction` on a checkerboard grid.
///
/// Total: every direction has a neighbour under this topology.
pub const fn checkerboard_offset(direction: Direction) -> Offset {
    match direction {
        Direction::North => Offset::NORTH,
        Direction::NorthEast => Offset::NORTH_EAST,
        Direction::East => Offset::EAST,
        Direction::SouthEast => Offset::SOUTH_EAST,
        Direction::South => Offset::SOUTH,
        Direction::SouthWest => Offset::SOUTH_WEST,
        Direction::West => Offset::WEST,
        Direction::NorthWest => Offset::NORTH_WEST,
    }
}

/// Offset for `direction` on a row-staggered grid.
///
/// Total over the six staggered directions. The offsets are the
/// checkerboard ones for the same directions, the same on every row.
pub const fn staggered_offset(direction: StaggeredDirection) -> Offset {
    match direction {
        StaggeredDirection::NorthEast => Offset::NORTH_EAST,
        StaggeredDirection::East => Offset::EAST,
        StaggeredDirection::SouthEast => Offset::SOUTH_EAST,
        StaggeredDirection::SouthWest => Offset::SOUTH_WEST,
        StaggeredDirection::West => Offset::WEST,
        StaggeredDirection::NorthWest => Offset::NORTH_WEST,
    }
}

/// Offset of the neighbour in `direction` under `topology`.
///
/// Fails with [`IllegalArgument::Direction`] for north and south under
/// [`Topology::Staggered`]. Callers that already hold a
/// [`StaggeredDirection`] should use [`staggered_offset`] directly.
///
/// # Examples
///
/// ```
/// use tessel_space::{resolve_offset, Direction, Offset, Topology};
///
/// assert_eq!(resolve_offset(Direction::East, Topology::Checkerboard), Ok(Offset::EAST));
/// assert!(resolve_offset(Direction::North, Topology::Staggered).is_err());
/// ```
pub fn resolve_offset(direction: Direction, topology: Topology) -> Result<Offset, IllegalArgument> {
    match topology {
        Topology::Checkerboard => Ok(checkerboard_offset(direction)),
        Topology::Staggered => StaggeredDirection::try_from(direction)
            .map(staggered_offset)
            .inspect_err(|_| trace!(%direction, "no staggered neighbour")),
    }
}

/// Direction whose checkerboard offset is `offset`.
///
/// Discriminates on `dx` first, then `dy`. Fails with
/// [`IllegalArgument::Offset`] for `(0, 0)` and anything outside the
/// 3×3 block around the origin.
pub fn resolve_direction(offset: Point) -> Result<Direction, IllegalArgument> {
    let found = match offset.x {
        1 => match offset.y {
            1 => Some(Direction::SouthEast),
            0 => Some(Direction::East),
            -1 => Some(Direction::NorthEast),
            _ => None,
        },
        0 => match offset.y {
            1 => Some(Direction::South),
            -1 => Some(Direction::North),
            _ => None,
        },
        -1 => match offset.y {
            1 => Some(Direction::SouthWest),
            0 => Some(Direction::West),
            -1 => Some(Direction::NorthWest),
            _ => None,
        },
        _ => None,
    };
    found.ok_or_else(|| {
        trace!(dx = offset.x, dy = offset.y, "not a unit offset");
        IllegalArgument::Offset {
            dx: offset.x,
            dy: offset.y,
        }
    })
}

/// [`resolve_direction`] dispatched by topology.
///
/// Only the checkerboard table has an inverse; under
/// [`Topology::Staggered`] this always fails with
/// [`IllegalArgument::NoInverse`].
pub fn resolve_direction_in(offset: Point, topology: Topology) -> Result<Direction, IllegalArgument> {
    match topology {
        Topology::Checkerboard => resolve_direction(offset),
        Topology::Staggered => Err(IllegalArgument::NoInverse { topology }),
    }
}
