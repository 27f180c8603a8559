//! Benchmark for the iteration protocol.
//!
//! Compares adapter chains driven through `Iterum` against the equivalent
//! `std::iter` chains over the same data.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iterum::prelude::*;
use std::hint::black_box;

// =============================================================================
// 1. Adapter Chains
// =============================================================================

fn benchmark_map_filter_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_sum");

    for size in [100, 1_000, 10_000] {
        let data: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("iterum", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total = iterum(black_box(data).iter())
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .sum();
                black_box(total)
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &data, |bencher, data| {
            bencher.iter(|| {
                let total: u64 = black_box(data)
                    .iter()
                    .map(|x| x * 3)
                    .filter(|x| x % 2 == 0)
                    .sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

fn benchmark_zip_enumerate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip_enumerate");
    let left: Vec<u32> = (0..1_000).collect();
    let right: Vec<u32> = (0..1_000).rev().collect();

    group.bench_function("iterum", |bencher| {
        bencher.iter(|| {
            let count = iterum(black_box(&left).iter())
                .zip(iterum(black_box(&right).iter()))
                .enumerate()
                .filter(|(index, (a, b))| (*index as u32 + **a + **b) % 3 == 0)
                .count();
            black_box(count)
        });
    });

    group.bench_function("std", |bencher| {
        bencher.iter(|| {
            let count = black_box(&left)
                .iter()
                .zip(black_box(&right).iter())
                .enumerate()
                .filter(|(index, (a, b))| (*index as u32 + **a + **b) % 3 == 0)
                .count();
            black_box(count)
        });
    });

    group.finish();
}

// =============================================================================
// 2. Lookahead and Short-Circuiting
// =============================================================================

fn benchmark_peekable_grouping(criterion: &mut Criterion) {
    let data: Vec<u8> = (0..2_000u32).map(|x| (x / 7 % 5) as u8).collect();

    criterion.bench_function("peekable_run_length", |bencher| {
        bencher.iter(|| {
            let mut values = iterum(black_box(&data).iter().copied()).peekable();
            let mut runs = 0usize;
            while let Maybe::Some(current) = values.next() {
                while values.next_if_eq(&current).is_some() {}
                runs += 1;
            }
            black_box(runs)
        });
    });
}

fn benchmark_try_fold(criterion: &mut Criterion) {
    let data: Vec<i64> = (1..=10_000).collect();

    criterion.bench_function("try_fold_checked_add", |bencher| {
        bencher.iter(|| {
            let total = iterum(black_box(&data).iter())
                .try_fold(0i64, |total, x| total.checked_add(*x).ok_or(()));
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    benchmark_map_filter_sum,
    benchmark_zip_enumerate,
    benchmark_peekable_grouping,
    benchmark_try_fold,
);

criterion_main!(benches);
