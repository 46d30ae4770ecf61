use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use seqops::prelude::*;

fn pipeline(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let nums: Vec<i64> = std::iter::repeat_with(|| rng.random_range(1..=1_000_000))
        .take(100_000)
        .collect();

    let mut group = criterion.benchmark_group("select_map_fold");

    group.bench_function("operators", |bencher| {
        bencher.iter(|| {
            fold(
                map(
                    select(restartable(black_box(&nums)), unary(|n: &&i64| **n % 2 == 0)),
                    unary(|n: &i64| n * 3),
                ),
                0_i64,
                |sum, n| sum + n,
            )
        });
    });

    group.bench_function("iterator_baseline", |bencher| {
        bencher.iter(|| {
            black_box(&nums)
                .iter()
                .filter(|n| **n % 2 == 0)
                .map(|n| n * 3)
                .fold(0_i64, |sum, n| sum + n)
        });
    });

    group.finish();

    let mut group = criterion.benchmark_group("find_early_exit");

    group.bench_function("find", |bencher| {
        bencher.iter(|| {
            find(restartable(black_box(&nums)), unary(|n: &&i64| **n % 9973 == 0))
                .first()
                .ok()
        });
    });

    group.finish();
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
