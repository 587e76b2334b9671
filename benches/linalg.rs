//! Benchmarks for the dense linear-algebra routines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::prelude::*;

/// Deterministic well-conditioned test matrix: diagonally dominant.
fn sample_matrix(n: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..n * n)
        .map(|i| {
            let (row, col) = (i / n, i % n);
            if row == col {
                n as f64 + 1.0
            } else {
                ((i as f64) * 0.37).sin()
            }
        })
        .collect();
    Matrix::from_vec(n, n, data).expect("generated dimensions match")
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for &n in &[4, 6, 8] {
        let m = sample_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(&m).det());
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for &n in &[4, 8] {
        let m = sample_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(&m).inverse());
        });
    }
    group.finish();
}

fn bench_qr(c: &mut Criterion) {
    let mut group = c.benchmark_group("qr_decomposition");
    for &n in &[4, 8, 16] {
        let m = sample_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(&m).qr());
        });
    }
    group.finish();
}

fn bench_eigenvalues(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigenvalues");
    group.sample_size(20);
    for &n in &[4, 8] {
        let m = sample_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(&m).eigenvalues());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_determinant,
    bench_inverse,
    bench_qr,
    bench_eigenvalues
);
criterion_main!(benches);
