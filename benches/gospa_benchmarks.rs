//! GOSPA metric benchmarks using Criterion.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::{DMatrix, DVector};

use gospa_rs::{calculate_gospa, AssignmentSolver, GospaConfig, JonkerVolgenant};

/// Deterministic point cloud on a spiral, shifted by `offset` per axis.
fn create_test_points(n: usize, offset: f64) -> Vec<DVector<f64>> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * 0.37;
            let radius = 10.0 + (i % 7) as f64;
            DVector::from_vec(vec![
                radius * angle.cos() + offset,
                radius * angle.sin() + offset,
            ])
        })
        .collect()
}

fn benchmark_gospa_10_items(c: &mut Criterion) {
    let targets = create_test_points(10, 0.0);
    let tracks = create_test_points(10, 0.5);
    let config = GospaConfig::new(5.0, 2.0);

    c.bench_function("gospa_10_items", |b| {
        b.iter(|| calculate_gospa(black_box(&targets), black_box(&tracks), config))
    });
}

fn benchmark_gospa_50_items(c: &mut Criterion) {
    let targets = create_test_points(50, 0.0);
    let tracks = create_test_points(50, 0.5);
    let config = GospaConfig::new(5.0, 2.0);

    c.bench_function("gospa_50_items", |b| {
        b.iter(|| calculate_gospa(black_box(&targets), black_box(&tracks), config))
    });
}

fn benchmark_gospa_100_items(c: &mut Criterion) {
    let targets = create_test_points(100, 0.0);
    let tracks = create_test_points(100, 0.5);
    let config = GospaConfig::new(5.0, 2.0);

    c.bench_function("gospa_100_items", |b| {
        b.iter(|| calculate_gospa(black_box(&targets), black_box(&tracks), config))
    });
}

fn benchmark_gospa_rectangular(c: &mut Criterion) {
    let targets = create_test_points(100, 0.0);
    let tracks = create_test_points(60, 0.5);
    let config = GospaConfig::new(5.0, 2.0);

    c.bench_function("gospa_100_targets_60_tracks", |b| {
        b.iter(|| calculate_gospa(black_box(&targets), black_box(&tracks), config))
    });
}

fn benchmark_gospa_all_clutter(c: &mut Criterion) {
    // Every pair lands on the cutoff: a uniform matrix is the solver's
    // most tie-heavy input.
    let targets = create_test_points(50, 0.0);
    let tracks = create_test_points(50, 1e3);
    let config = GospaConfig::new(5.0, 2.0);

    c.bench_function("gospa_50_items_all_clutter", |b| {
        b.iter(|| calculate_gospa(black_box(&targets), black_box(&tracks), config))
    });
}

fn benchmark_solver_only(c: &mut Criterion) {
    // Assignment solve in isolation, without matrix construction.
    let cost_matrix = DMatrix::from_fn(100, 100, |i, j| {
        ((i as f64 * 13.0 + j as f64 * 7.0).sin() + 1.5).abs()
    });
    let solver = JonkerVolgenant;

    c.bench_function("solver_100x100", |b| {
        b.iter(|| solver.solve(black_box(&cost_matrix)))
    });
}

criterion_group!(
    benches,
    benchmark_gospa_10_items,
    benchmark_gospa_50_items,
    benchmark_gospa_100_items,
    benchmark_gospa_rectangular,
    benchmark_gospa_all_clutter,
    benchmark_solver_only,
);
criterion_main!(benches);
