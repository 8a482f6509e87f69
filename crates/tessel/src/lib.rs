//! Tessel: adjacency geometry for tile-based spatial simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // Offsets per topology.
//! let east = resolve_offset(Direction::East, Topology::Checkerboard).unwrap();
//! assert_eq!((east.dx(), east.dy()), (1, 0));
//! assert!(resolve_offset(Direction::North, Topology::Staggered).is_err());
//!
//! // And back again.
//! assert_eq!(resolve_direction(Point::new(-1, -1)), Ok(Direction::NorthWest));
//!
//! // Project a south-east-relative point into the north-east frame.
//! assert_eq!(
//!     reflect_to_corner(Point::new(3, -2), Corner::NorthEast),
//!     Point::new(3, 2)
//! );
//!
//! // A bounded 16×16 staggered grid that wraps at its edges.
//! let grid = TileGrid::new(GridConfig {
//!     width: 16,
//!     height: 16,
//!     topology: Topology::Staggered,
//!     edge: EdgeBehavior::Wrap,
//! })
//! .unwrap();
//! assert_eq!(grid.neighbours(Point::new(0, 0)).unwrap().len(), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Directions, corners, topologies, points, offsets, errors |
//! | [`space`] | `tessel-space` | Resolvers, reflection, bounded tile grids |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`tessel-core`).
///
/// [`types::Direction`], [`types::Corner`], [`types::Topology`],
/// [`types::Point`], [`types::Offset`], and the
/// [`types::IllegalArgument`] error.
pub use tessel_core as types;

/// Geometry and bounded grids (`tessel-space`).
///
/// The resolvers [`space::resolve_offset`] and
/// [`space::resolve_direction`], [`space::reflect_to_corner`], and
/// [`space::TileGrid`].
pub use tessel_space as space;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types and errors
    pub use tessel_core::{
        Corner, Direction, IllegalArgument, Offset, Point, StaggeredDirection, Topology,
    };

    // Geometry
    pub use tessel_space::{
        checkerboard_offset, reflect_to_corner, reflect_to_direction, resolve_direction,
        resolve_direction_in, resolve_offset, staggered_offset,
    };

    // Grids
    pub use tessel_space::{EdgeBehavior, GridConfig, SpaceError, TileGrid};
}
