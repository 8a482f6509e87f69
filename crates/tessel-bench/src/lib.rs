//! Benchmark profiles and utilities for Tessel.
//!
//! Provides pre-built inputs for benchmarking:
//!
//! - [`reference_grid`]: 100x100 grid (10K cells) for a given topology
//! - [`scatter_points`]: deterministic point cloud for reflection benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{Point, Topology};
use tessel_space::{EdgeBehavior, GridConfig, SpaceError, TileGrid};

/// Side length of [`reference_grid`].
pub const REFERENCE_SIDE: u32 = 100;

/// Build a reference benchmark grid: 100x100 cells with wrapping edges.
pub fn reference_grid(topology: Topology) -> Result<TileGrid, SpaceError> {
    TileGrid::new(GridConfig {
        width: REFERENCE_SIDE,
        height: REFERENCE_SIDE,
        topology,
        edge: EdgeBehavior::Wrap,
    })
}

/// `count` deterministic pseudo-random points with components in
/// `-bound..bound`.
pub fn scatter_points(count: usize, bound: i32) -> Vec<Point> {
    let span = (bound as i64 * 2).max(1) as u64;
    (0..count as u64)
        .map(|i| {
            let x = (i.wrapping_mul(6364136223846793007) % span) as i64 - bound as i64;
            let y = (i.wrapping_mul(1442695040888963407) % span) as i64 - bound as i64;
            Point::new(x as i32, y as i32)
        })
        .collect()
}
