//! Criterion micro-benchmarks for offset resolution and reflection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessel_bench::scatter_points;
use tessel_core::{Corner, Direction, Topology};
use tessel_space::{reflect_to_corner, resolve_direction, resolve_offset};
use tessel_test_utils::unit_block;

/// Benchmark: resolve all 8 directions under both topologies.
fn bench_resolve_offset(c: &mut Criterion) {
    c.bench_function("resolve_offset_all_directions", |b| {
        b.iter(|| {
            for topology in [Topology::Checkerboard, Topology::Staggered] {
                for d in Direction::ALL {
                    black_box(resolve_offset(black_box(d), topology).ok());
                }
            }
        });
    });
}

/// Benchmark: inverse lookup over the 3x3 block, origin included.
fn bench_resolve_direction(c: &mut Criterion) {
    let block = unit_block();

    c.bench_function("resolve_direction_unit_block", |b| {
        b.iter(|| {
            for &o in &block {
                black_box(resolve_direction(black_box(o)).ok());
            }
        });
    });
}

/// Benchmark: reflect 10K points into every corner.
fn bench_reflect_to_corner(c: &mut Criterion) {
    let points = scatter_points(10_000, 1_000);

    c.bench_function("reflect_to_corner_10k", |b| {
        b.iter(|| {
            for &p in &points {
                for corner in Corner::ALL {
                    black_box(reflect_to_corner(p, corner));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_offset,
    bench_resolve_direction,
    bench_reflect_to_corner
);
criterion_main!(benches);
