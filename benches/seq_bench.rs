//! Benchmark for stepped ranges.
//!
//! Measures `Seq` against `std` ranges with `step_by`, from both ends.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iterum::prelude::*;
use std::hint::black_box;

fn benchmark_seq_forward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("seq_forward");

    for step in [1i64, 7, 64] {
        group.bench_with_input(BenchmarkId::new("seq", step), &step, |bencher, &step| {
            bencher.iter(|| black_box(seq(0, black_box(100_000), step)).sum());
        });

        group.bench_with_input(BenchmarkId::new("std", step), &step, |bencher, &step| {
            bencher.iter(|| {
                let total: i64 = (0..black_box(100_000))
                    .step_by(usize::try_from(step).unwrap_or(1))
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn benchmark_seq_backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("seq_backward");

    group.bench_function("seq_rev", |bencher| {
        bencher.iter(|| black_box(seq(0i32, black_box(100_000), 3).rev().count()));
    });

    group.bench_function("seq_negative_step", |bencher| {
        bencher.iter(|| black_box(seq(black_box(100_000i32), 0, -3).count()));
    });

    group.bench_function("std_rev", |bencher| {
        bencher.iter(|| black_box((0i32..black_box(100_000)).step_by(3).rev().count()));
    });

    group.finish();
}

fn benchmark_seq_len(criterion: &mut Criterion) {
    criterion.bench_function("seq_len", |bencher| {
        bencher.iter(|| black_box(seq(black_box(-1_000_000i64), 1_000_000, 13)).len());
    });
}

criterion_group!(
    benches,
    benchmark_seq_forward,
    benchmark_seq_backward,
    benchmark_seq_len,
);

criterion_main!(benches);
