//! Criterion benchmarks for u-servicing optimizers.
//!
//! Uses seeded synthetic option sets with correlated cost and revenue,
//! the hard case for knapsack bounds.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_servicing::exhaustive::{ExhaustiveConfig, ExhaustiveSearchOptimizer, SearchMethod};
use u_servicing::model::{Budget, OptionSet};
use u_servicing::ranked::RankedFillOptimizer;

fn synthetic(n: usize, seed: u64) -> (OptionSet, Budget) {
    let mut rng = StdRng::seed_from_u64(seed);
    let options: OptionSet = (0..n)
        .map(|_| {
            let cost: f64 = rng.random_range(1.0..50.0_f64).round();
            let revenue = cost + rng.random_range(0.0..10.0_f64).round();
            (cost, revenue)
        })
        .collect();
    let total: f64 = options.iter().map(|o| o.fuel_cost).sum();
    (options, Budget::new((total / 2.0).round()))
}

fn bench_ranked_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked_fill");

    for &n in &[100, 1_000, 10_000] {
        let (options, budget) = synthetic(n, 42);
        let optimizer = RankedFillOptimizer::new();
        group.bench_with_input(BenchmarkId::from_parameter(n), &options, |b, o| {
            b.iter(|| black_box(optimizer.run(black_box(o), budget)))
        });
    }
    group.finish();
}

fn bench_branch_and_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_and_bound");
    group.sample_size(10);

    for &n in &[20, 40, 80] {
        let (options, budget) = synthetic(n, 42);
        let optimizer = ExhaustiveSearchOptimizer::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &options, |b, o| {
            b.iter(|| black_box(optimizer.run(black_box(o), budget)))
        });
    }
    group.finish();
}

fn bench_dynamic_programming(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic_programming");
    group.sample_size(10);

    for &n in &[20, 80, 320] {
        let (options, budget) = synthetic(n, 42);
        let optimizer = ExhaustiveSearchOptimizer::new(
            ExhaustiveConfig::default()
                .with_method(SearchMethod::DynamicProgramming { resolution: 1.0 }),
        );
        group.bench_with_input(BenchmarkId::from_parameter(n), &options, |b, o| {
            b.iter(|| black_box(optimizer.run(black_box(o), budget)))
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_and_bound_parallel");
    group.sample_size(10);

    for &n in &[40, 80] {
        let (options, budget) = synthetic(n, 42);
        let optimizer = ExhaustiveSearchOptimizer::new(
            ExhaustiveConfig::default().with_parallel(true).with_split_depth(6),
        );
        group.bench_with_input(BenchmarkId::from_parameter(n), &options, |b, o| {
            b.iter(|| black_box(optimizer.run(black_box(o), budget)))
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_ranked_fill,
    bench_branch_and_bound,
    bench_dynamic_programming,
    bench_parallel
);
#[cfg(not(feature = "parallel"))]
criterion_group!(
    benches,
    bench_ranked_fill,
    bench_branch_and_bound,
    bench_dynamic_programming
);
criterion_main!(benches);
