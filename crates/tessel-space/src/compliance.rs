//! Tile grid compliance test helpers.
//!
//! These functions verify that a [`TileGrid`] satisfies the invariants
//! its neighbour and ordering queries promise. Reused across every
//! topology / edge behavior combination in the grid tests.

use crate::edge::EdgeBehavior;
use crate::grid::TileGrid;
use indexmap::IndexSet;
use tessel_core::Topology;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &TileGrid) {
    for cell in grid.canonical_ordering() {
        for (_, nb) in grid.neighbours(cell).expect("in-bounds cell") {
            let back = grid.neighbours(nb).expect("neighbour is in bounds");
            assert!(
                back.iter().any(|&(_, p)| p == cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that no cell has more neighbours than its topology allows and
/// that every neighbour is in bounds.
pub fn assert_neighbour_count_bounded(grid: &TileGrid) {
    let max = grid.topology().neighbour_count();
    for cell in grid.canonical_ordering() {
        let n = grid.neighbours(cell).expect("in-bounds cell");
        assert!(n.len() <= max, "{cell} has {} neighbours, max {max}", n.len());
        for (d, nb) in n {
            assert!(grid.contains(nb), "{d} neighbour {nb} of {cell} is out of bounds");
        }
    }
}

/// Assert that neighbours come back in the topology's direction order.
pub fn assert_neighbours_in_direction_order(grid: &TileGrid) {
    let order = grid.topology().directions();
    for cell in grid.canonical_ordering() {
        let dirs: Vec<_> = grid
            .neighbours(cell)
            .expect("in-bounds cell")
            .iter()
            .map(|&(d, _)| d)
            .collect();
        let expected: Vec<_> = order.iter().copied().filter(|d| dirs.contains(d)).collect();
        assert_eq!(dirs, expected, "direction order broken at {cell}");
    }
}

/// Assert that `direction_between` inverts `neighbour` on checkerboard
/// grids where no neighbour is clamped or aliased by a narrow wrap.
pub fn assert_checkerboard_inverse(grid: &TileGrid) {
    if grid.topology() != Topology::Checkerboard
        || grid.edge_behavior() == EdgeBehavior::Clamp
        || grid.width() < 3
        || grid.height() < 3
    {
        return;
    }
    for cell in grid.canonical_ordering() {
        for (d, nb) in grid.neighbours(cell).expect("in-bounds cell") {
            assert_eq!(
                grid.direction_between(cell, nb),
                Ok(d),
                "direction_between({cell}, {nb}) != {d}"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(grid: &TileGrid) {
    let a = grid.canonical_ordering();
    let b = grid.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// points and that `canonical_rank` indexes into it.
pub fn assert_canonical_ordering_complete(grid: &TileGrid) {
    let ordering = grid.canonical_ordering();
    assert_eq!(
        ordering.len(),
        grid.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        grid.cell_count(),
        "canonical_ordering has duplicates"
    );
    for (i, &p) in ordering.iter().enumerate() {
        assert_eq!(grid.canonical_rank(p), Some(i), "canonical_rank({p})");
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &TileGrid) {
    assert_neighbours_symmetric(grid);
    assert_neighbour_count_bounded(grid);
    assert_neighbours_in_direction_order(grid);
    assert_checkerboard_inverse(grid);
    assert_canonical_ordering_deterministic(grid);
    assert_canonical_ordering_complete(grid);
}
