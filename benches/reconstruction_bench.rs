//! Benchmarks for face-state reconstruction.
//!
//! Run with: `cargo bench --bench reconstruction_bench`
//!
//! Benchmarks the PPM point kernel, single-line sweeps along each axis and
//! full block sweeps for each method.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ppm_rs::reconstruction::{PiecewiseParabolic, ppm};
use ppm_rs::{
    Axis, BlockShape, CellField, IndexRange, IndexRegion, Line, LineBuffer, Reconstruction,
    SweepConfig, reconstruct_line, sweep_block,
};

// One more than the stencil half-width: sweeps extend one cell past the interior
const GHOSTS: usize = 3;

/// Cubic block of `n` interior cells per axis with a smooth field and a shock.
fn setup_field(n: usize, nvar: usize) -> CellField {
    let m = n + 2 * GHOSTS;
    CellField::from_fn(BlockShape::new(nvar, m, m, m), |v, k, j, i| {
        let (x, y, z) = (i as f64, j as f64, k as f64);
        let smooth = (0.2 * x).sin() * (0.15 * y).cos() + 0.05 * z;
        let shock = if i + j > m { 0.5 } else { 0.0 };
        (1.0 + 0.1 * v as f64) * (2.0 + smooth + shock)
    })
}

/// Sweep range giving both states on every interior face.
fn sweep_range(n: usize) -> IndexRange {
    IndexRange::new(GHOSTS, n + GHOSTS - 1).expand(1)
}

/// Benchmark the point kernel on a stream of stencils.
fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppm_kernel");

    let mut x: u64 = 42;
    let samples: Vec<f64> = (0..4096)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            x as f64 / u64::MAX as f64 * 2.0 - 1.0
        })
        .collect();

    group.bench_function("random_stencils", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for w in samples.windows(5) {
                let faces = ppm(w[0], w[1], w[2], w[3], w[4]);
                acc += faces.left - faces.right;
            }
            black_box(acc)
        });
    });

    group.finish();
}

/// Benchmark one line sweep along each axis.
fn bench_line_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_sweep");

    for n in [32, 64, 128] {
        let q = setup_field(n, 5);
        let range = sweep_range(n);
        let mid = n / 2 + GHOSTS;

        for axis in Axis::ALL {
            let line = Line::new(axis, mid, mid);
            let mut ql = LineBuffer::for_axis(&q.shape(), axis);
            let mut qr = LineBuffer::for_axis(&q.shape(), axis);

            group.bench_with_input(BenchmarkId::new(axis.name(), n), &n, |b, _| {
                b.iter(|| {
                    reconstruct_line(
                        &PiecewiseParabolic,
                        black_box(&q),
                        &line,
                        range,
                        &mut ql,
                        &mut qr,
                    )
                })
            });
        }
    }

    group.finish();
}

/// Benchmark a full block sweep along x1 for each method.
fn bench_block_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_sweep");
    group.sample_size(20);

    for n in [16, 32] {
        let q = setup_field(n, 5);
        let interior = IndexRange::new(GHOSTS, n + GHOSTS - 1);
        let region = IndexRegion::new(interior, interior, sweep_range(n));

        for method in Reconstruction::ALL {
            for parallel in [false, true] {
                let config = SweepConfig::serial(method).with_parallel(parallel);
                let label = format!("{}_{}", method, if parallel { "par" } else { "seq" });

                group.bench_with_input(BenchmarkId::new(label, n), &n, |b, _| {
                    b.iter(|| {
                        sweep_block(black_box(&q), Axis::X1, &region, &config, |s| {
                            black_box(s.ql.as_slice()[0] + s.qr.as_slice()[0]);
                        })
                    })
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_line_sweep, bench_block_sweep);
criterion_main!(benches);
