//! Benchmarks for polynomial arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use polyops::prelude::*;

/// Generates a deterministic polynomial with i64 coefficients.
fn poly_i64(degree: usize) -> Polynomial<i64> {
    let coeffs: Vec<i64> = (0..=degree).map(|i| (i as i64 % 100) - 50).collect();
    Polynomial::from_coeffs(degree, &coeffs).expect("slice length matches degree")
}

/// Generates a deterministic polynomial with f64 coefficients.
fn poly_f64(degree: usize) -> Polynomial<f64> {
    let coeffs: Vec<f64> = (0..=degree).map(|i| (i as f64 % 100.0) - 50.0).collect();
    Polynomial::from_coeffs(degree, &coeffs).expect("slice length matches degree")
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_add");

    for size in [16, 64, 256, 1024] {
        let p = poly_i64(size);
        let q = poly_i64(size / 2);

        group.bench_with_input(BenchmarkId::new("i64", size), &size, |b, _| {
            b.iter(|| black_box(p.add(&q)));
        });
    }

    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [16, 64, 256] {
        let p = poly_i64(size);
        let q = poly_i64(size);

        group.bench_with_input(BenchmarkId::new("i64", size), &size, |b, _| {
            b.iter(|| black_box(p.mul(&q)));
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_eval");

    for size in [16, 64, 256, 1024] {
        let p = poly_f64(size);

        group.bench_with_input(BenchmarkId::new("f64", size), &size, |b, _| {
            b.iter(|| black_box(p.eval(&1.0001)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_mul, bench_eval);

criterion_main!(benches);
