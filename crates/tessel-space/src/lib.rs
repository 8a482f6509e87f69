//! Adjacency geometry for Tessel grids.
//!
//! This crate turns the vocabulary of `tessel-core` into geometry:
//!
//! - [`resolve_offset`] maps a direction and a [`Topology`] to the unit
//!   offset of the neighbouring cell, backed by the two total lookups
//!   [`checkerboard_offset`] and [`staggered_offset`].
//! - [`resolve_direction`] is the inverse over the checkerboard table.
//! - [`reflect_to_corner`] projects a point stored relative to the
//!   south-east corner into the frame of any other corner.
//!
//! All of the above are pure functions over `Copy` values.
//!
//! # Bounded grids
//!
//! [`TileGrid`] applies a topology to a finite `width × height` grid with
//! configurable [`EdgeBehavior`] (absorb, clamp, wrap), built from a
//! validated [`GridConfig`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod edge;
pub mod error;
pub mod grid;
pub mod reflect;
pub mod resolve;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::GridConfig;
pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use grid::TileGrid;
pub use reflect::{reflect_to_corner, reflect_to_direction};
pub use resolve::{
    checkerboard_offset, resolve_direction, resolve_direction_in, resolve_offset,
    staggered_offset,
};
pub use tessel_core::{
    Corner, Direction, IllegalArgument, Offset, Point, StaggeredDirection, Topology,
};
