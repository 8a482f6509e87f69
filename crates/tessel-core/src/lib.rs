//! Core types for the Tessel grid geometry workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: compass directions, the
//! corner and staggered subsets of them, grid topologies, points,
//! validated unit offsets, and the [`IllegalArgument`] error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod offset;
pub mod point;
pub mod topology;

pub use direction::{Corner, Direction, ParseDirectionError, StaggeredDirection};
pub use error::IllegalArgument;
pub use offset::Offset;
pub use point::Point;
pub use topology::Topology;
