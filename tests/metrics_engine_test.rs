// ABOUTME: Integration tests for the metrics engine
// ABOUTME: Validates derivation semantics, edge cases, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use poolside_server::errors::ErrorCode;
use poolside_server::intelligence::{MetricsEngine, PacingConsistency};
use poolside_server::models::RaceRecord;

fn race(age: u32, distance: u32, laps: Vec<f64>, source: &str) -> RaceRecord {
    RaceRecord::new("Alice", age, distance, "Freestyle", laps, Utc::now(), source)
}

#[test]
fn test_predicted_time_extrapolates_linear_trend() {
    // Totals 100 then 110 at indices 0 and 1: the fitted line reaches 120 at index 2
    let first = race(16, 100, vec![50.0, 50.0], "r0.txt");
    let second = race(16, 100, vec![55.0, 55.0], "r1.txt");
    let metrics = MetricsEngine::compute("Alice", &[&first, &second]).unwrap();

    assert!((metrics.snapshot.predicted_time - 120.0).abs() < 1e-9);
    assert!((metrics.snapshot.total_time - 105.0).abs() < 1e-9);
}

#[test]
fn test_single_record_prediction_is_constant() {
    let only = race(16, 100, vec![48.0, 49.0], "r0.txt");
    let metrics = MetricsEngine::compute("Alice", &[&only]).unwrap();
    assert!((metrics.snapshot.predicted_time - 97.0).abs() < 1e-9);
}

#[test]
fn test_velocity_uses_first_record_only() {
    // First race: 100m in 90s over 3 laps -> 100 / 30 = 3.33 rounded
    let first = race(16, 100, vec![30.0, 30.0, 30.0], "r0.txt");
    // A much slower later race must not affect the velocity metric
    let second = race(16, 100, vec![60.0, 60.0, 60.0], "r1.txt");

    let single = MetricsEngine::compute("Alice", &[&first]).unwrap();
    assert!((single.snapshot.velocity - 3.33).abs() < 1e-9);

    let both = MetricsEngine::compute("Alice", &[&first, &second]).unwrap();
    assert!((both.snapshot.velocity - 3.33).abs() < 1e-9);
}

#[test]
fn test_velocity_degrades_to_zero_without_laps() {
    let empty = race(16, 100, Vec::new(), "r0.txt");
    let metrics = MetricsEngine::compute("Alice", &[&empty]).unwrap();
    assert!(metrics.snapshot.velocity.abs() < f64::EPSILON);
    assert!(metrics.snapshot.average_lap_time.abs() < f64::EPSILON);
}

#[test]
fn test_target_heart_rate_sprint_zone() {
    // Age 20 -> mhr 200; mean distance 50 selects the 0.85 multiplier
    let sprint = race(20, 50, vec![28.0, 29.0], "r0.txt");
    let metrics = MetricsEngine::compute("Alice", &[&sprint]).unwrap();
    assert!((metrics.snapshot.heart_rate - 170.0).abs() < 1e-9);
    assert_eq!(metrics.age, 20);
}

#[test]
fn test_target_heart_rate_uses_mean_distance() {
    // Mean of 50 and 200 is 125: endurance zone, mhr 200 * 0.65 = 130
    let short = race(20, 50, vec![28.0], "r0.txt");
    let long = race(20, 200, vec![150.0], "r1.txt");
    let metrics = MetricsEngine::compute("Alice", &[&short, &long]).unwrap();
    assert!((metrics.snapshot.heart_rate - 130.0).abs() < 1e-9);
}

#[test]
fn test_age_taken_from_first_record() {
    // A later file can carry a different age; the first record wins
    let first = race(16, 50, vec![30.0], "r0.txt");
    let second = race(17, 50, vec![30.0], "r1.txt");
    let metrics = MetricsEngine::compute("Alice", &[&first, &second]).unwrap();
    assert_eq!(metrics.age, 16);
}

#[test]
fn test_average_lap_time_is_mean_of_per_race_means() {
    let first = race(16, 100, vec![30.0, 30.0], "r0.txt"); // mean 30
    let second = race(16, 100, vec![50.0, 50.0, 50.0, 50.0], "r1.txt"); // mean 50
    let metrics = MetricsEngine::compute("Alice", &[&first, &second]).unwrap();
    assert!((metrics.snapshot.average_lap_time - 40.0).abs() < 1e-9);
}

#[test]
fn test_pacing_classification() {
    // Steady laps: deviation well under the 5-second limit
    let steady = race(16, 100, vec![30.0, 31.0, 30.5], "r0.txt");
    let metrics = MetricsEngine::compute("Alice", &[&steady]).unwrap();
    assert_eq!(
        metrics.snapshot.pacing_consistency,
        PacingConsistency::Consistent
    );

    // Swinging laps: population std dev of [20, 40] is 10
    let swinging = race(16, 100, vec![20.0, 40.0], "r1.txt");
    let metrics = MetricsEngine::compute("Alice", &[&swinging]).unwrap();
    assert_eq!(
        metrics.snapshot.pacing_consistency,
        PacingConsistency::Variable
    );
    assert!((metrics.raw.pacing_variation - 10.0).abs() < 1e-9);
}

#[test]
fn test_empty_subset_is_swimmer_not_found() {
    let err = MetricsEngine::compute("Ghost", &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::SwimmerNotFound);
}

#[test]
fn test_compute_is_deterministic() {
    let first = race(16, 100, vec![50.0, 52.0], "r0.txt");
    let second = race(16, 100, vec![55.0, 54.0], "r1.txt");
    let records = [&first, &second];

    let once = MetricsEngine::compute("Alice", &records).unwrap();
    let twice = MetricsEngine::compute("Alice", &records).unwrap();
    assert_eq!(once, twice);
}
