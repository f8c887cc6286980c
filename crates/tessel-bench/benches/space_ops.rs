//! Criterion micro-benchmarks for toroidal geometry.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tessel_space::{Space, Torus2D};

/// Benchmark: Moore neighbourhood of all 10K cells of a 100x100 torus.
fn bench_neighbours_torus_10k(c: &mut Criterion) {
    let space = Torus2D::new(100, 100).unwrap();

    c.bench_function("neighbours_torus_10k", |b| {
        b.iter(|| {
            for idx in 0..space.cell_count() {
                black_box(space.neighbours(idx));
            }
        });
    });
}

/// Benchmark: count live neighbours for every cell of a striped 100x100 grid.
fn bench_count_matching_10k(c: &mut Criterion) {
    let space = Torus2D::new(100, 100).unwrap();
    let cells: Vec<u8> = (0..10_000).map(|i| (i % 3 == 0) as u8).collect();

    c.bench_function("count_matching_10k", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for row in 0..100 {
                for col in 0..100 {
                    total += u32::from(space.count_matching(&cells, row, col, &1));
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: wrap 1000 off-grid coordinates.
fn bench_wrapped_index(c: &mut Criterion) {
    let space = Torus2D::new(100, 100).unwrap();
    let coords: Vec<(i32, i32)> = (0i64..1000)
        .map(|i| {
            let r = (i.wrapping_mul(6364136223846793005) % 400) as i32 - 200;
            let c = (i.wrapping_mul(1442695040888963407) % 400) as i32 - 200;
            (r, c)
        })
        .collect();

    c.bench_function("wrapped_index_1k", |b| {
        b.iter(|| {
            for &(r, col) in &coords {
                black_box(space.wrapped_index(r, col));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_torus_10k,
    bench_count_matching_10k,
    bench_wrapped_index
);
criterion_main!(benches);
