// ABOUTME: Integration tests for the recommendation engine
// ABOUTME: Validates threshold triggers, mutual exclusion, and the pacing remark
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use poolside_server::intelligence::{
    MetricsSnapshot, PacingConsistency, RawAggregates, RecommendationEngine,
};

fn snapshot() -> MetricsSnapshot {
    // A snapshot that fires no thresholds
    MetricsSnapshot {
        total_time: 100.0,
        average_lap_time: 50.0,
        velocity: 1.8,
        distance: 100.0,
        predicted_time: 100.0,
        heart_rate: 150.0,
        pacing_consistency: PacingConsistency::Consistent,
    }
}

fn raw(pacing_variation: f64) -> RawAggregates {
    RawAggregates {
        total_time: 100.0,
        average_lap_time: 50.0,
        pacing_variation,
    }
}

#[test]
fn test_quiet_metrics_yield_only_the_general_remark() {
    let result = RecommendationEngine::recommend(&snapshot(), &raw(2.0));
    assert!(result.specific_remarks.is_empty());
    assert!(result.general_remark.contains("relatively consistent"));
}

#[test]
fn test_all_thresholds_fire_in_evaluation_order() {
    let mut poor = snapshot();
    poor.average_lap_time = 120.0; // > 100
    poor.velocity = 1.0; // < 1.2
    poor.heart_rate = 105.0; // < 110
    poor.predicted_time = 120.0; // > 100 * 1.05

    let result = RecommendationEngine::recommend(&poor, &raw(2.0));
    assert_eq!(result.specific_remarks.len(), 4);
    assert!(result.specific_remarks[0].contains("average lap time"));
    assert!(result.specific_remarks[1].contains("velocity"));
    assert!(result.specific_remarks[2].contains("increasing the intensity"));
    assert!(result.specific_remarks[3].contains("decrease in performance"));
}

#[test]
fn test_heart_rate_branches_are_mutually_exclusive() {
    let mut high = snapshot();
    high.heart_rate = 195.0;
    let result = RecommendationEngine::recommend(&high, &raw(2.0));
    assert_eq!(result.specific_remarks.len(), 1);
    assert!(result.specific_remarks[0].contains("overexertion"));

    let mut mid = snapshot();
    mid.heart_rate = 150.0;
    let result = RecommendationEngine::recommend(&mid, &raw(2.0));
    assert!(result.specific_remarks.is_empty());
}

#[test]
fn test_trend_branches_are_mutually_exclusive() {
    let mut improving = snapshot();
    improving.predicted_time = 90.0; // < 100 * 0.95
    let result = RecommendationEngine::recommend(&improving, &raw(2.0));
    assert_eq!(result.specific_remarks.len(), 1);
    assert!(result.specific_remarks[0].contains("potential improvement"));

    // Within the 5% band neither trend remark fires
    let mut stable = snapshot();
    stable.predicted_time = 103.0;
    let result = RecommendationEngine::recommend(&stable, &raw(2.0));
    assert!(result.specific_remarks.is_empty());
}

#[test]
fn test_pacing_remark_reflects_raw_variation() {
    let result = RecommendationEngine::recommend(&snapshot(), &raw(6.0));
    assert!(result.general_remark.contains("consistent pace throughout"));

    let result = RecommendationEngine::recommend(&snapshot(), &raw(5.0));
    assert!(result.general_remark.contains("relatively consistent"));
}
