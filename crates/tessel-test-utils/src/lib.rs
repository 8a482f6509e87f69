//! Test utilities for Tessel development.
//!
//! Provides proptest strategies over the core vocabulary and a few
//! fixed point sets that tests and benches share.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use tessel_core::{Corner, Direction, Point, StaggeredDirection, Topology};

/// Any of the 8 directions.
pub fn arb_direction() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

/// Any of the 6 staggered directions.
pub fn arb_staggered_direction() -> impl Strategy<Value = StaggeredDirection> {
    proptest::sample::select(StaggeredDirection::ALL.to_vec())
}

/// Any of the 4 corners.
pub fn arb_corner() -> impl Strategy<Value = Corner> {
    proptest::sample::select(Corner::ALL.to_vec())
}

/// Either topology.
pub fn arb_topology() -> impl Strategy<Value = Topology> {
    prop_oneof![Just(Topology::Checkerboard), Just(Topology::Staggered)]
}

/// Any `i32`, with the two limits and zero drawn often.
pub fn arb_coord() -> impl Strategy<Value = i32> {
    prop_oneof![
        1 => Just(i32::MIN),
        1 => Just(i32::MAX),
        1 => Just(0),
        6 => any::<i32>(),
    ]
}

/// A point anywhere in the `i32` plane.
pub fn arb_point() -> impl Strategy<Value = Point> {
    (arb_coord(), arb_coord()).prop_map(|(x, y)| Point::new(x, y))
}

/// The 3×3 block of displacements around the origin, origin included.
pub fn unit_block() -> Vec<Point> {
    let mut out = Vec::with_capacity(9);
    for dy in -1..=1 {
        for dx in -1..=1 {
            out.push(Point::new(dx, dy));
        }
    }
    out
}
