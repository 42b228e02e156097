// ABOUTME: Criterion benchmarks for the metrics and recommendation pipeline
// ABOUTME: Measures per-request analysis cost over synthetic corpora of varying size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poolside_server::intelligence::{MetricsEngine, RecommendationEngine};
use poolside_server::models::RaceRecord;

fn synthetic_records(count: usize) -> Vec<RaceRecord> {
    (0..count)
        .map(|i| {
            let lap = 60.0 + i as f64 * 0.1;
            RaceRecord::new(
                "Alice",
                17,
                100,
                "Freestyle",
                vec![lap, lap + 0.5, lap - 0.5, lap],
                Utc::now(),
                format!("race-{i}.txt"),
            )
        })
        .collect()
}

fn bench_metrics_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics_pipeline");
    for size in [4_usize, 32, 256] {
        let records = synthetic_records(size);
        let refs: Vec<&RaceRecord> = records.iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &refs, |b, refs| {
            b.iter(|| {
                let metrics = MetricsEngine::compute("Alice", refs).unwrap();
                RecommendationEngine::recommend(&metrics.snapshot, &metrics.raw)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics_pipeline);
criterion_main!(benches);
