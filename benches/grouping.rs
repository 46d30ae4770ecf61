use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use seqops::prelude::*;
use serde_json::json;

fn grouping(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    let rows: Vec<_> = (0..20_000)
        .map(|id| {
            json!({
                "id": id,
                "bucket": rng.random_range(0..64_i64),
                "weight": rng.random_range(0..1_000_000_i64),
            })
        })
        .collect();

    let mut group = criterion.benchmark_group("eager_aggregation");

    group.bench_function("group_by_bucket", |bencher| {
        bencher.iter(|| {
            group_by(
                restartable(black_box(&rows)),
                unary(|row: &&serde_json::Value| row["bucket"].as_i64().unwrap_or(0)),
            )
        });
    });

    group.bench_function("sort_by_weight", |bencher| {
        bencher.iter(|| sort_by(restartable(black_box(&rows)), KeySpec::key("weight"), false));
    });

    group.bench_function("shuffle", |bencher| {
        let mut rng = StdRng::seed_from_u64(1);
        bencher.iter(|| shuffle_with(restartable(black_box(&rows)), &mut rng));
    });

    group.finish();
}

criterion_group!(benches, grouping);
criterion_main!(benches);
