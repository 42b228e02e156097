// ABOUTME: Metrics engine deriving per-swimmer performance statistics from race records
// ABOUTME: Produces the rounded presentation snapshot plus full-precision raw aggregates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! # Metrics Engine
//!
//! Derives a swimmer's performance statistics from their ordered race
//! records: mean total and lap times, first-race velocity, a linear-trend
//! prediction of the next race, an age- and distance-based target heart
//! rate, and a pacing-consistency classification.
//!
//! The snapshot carries presentation values rounded to two decimals; raw
//! aggregates keep full precision for downstream consumers. All
//! intermediate arithmetic is full precision. Given the same record subset
//! in the same order the output is deterministic.

use crate::errors::{AppError, AppResult};
use crate::intelligence::physiological_constants::{heart_rate, thresholds};
use crate::intelligence::statistical_analysis::StatisticalAnalyzer;
use crate::intelligence::PacingConsistency;
use crate::models::RaceRecord;
use serde::{Deserialize, Serialize};

/// Derived statistics for one swimmer, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Mean total race time in seconds
    pub total_time: f64,
    /// Mean of the per-race average lap times, in seconds
    pub average_lap_time: f64,
    /// Velocity in meters per second, from the first recorded race only
    pub velocity: f64,
    /// Mean race distance in meters
    pub distance: f64,
    /// Linear-trend prediction of the next race's total time, in seconds
    pub predicted_time: f64,
    /// Estimated target heart rate in beats per minute
    pub heart_rate: f64,
    /// Pacing-consistency classification
    pub pacing_consistency: PacingConsistency,
}

/// Full-precision aggregates backing the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAggregates {
    /// Mean total race time, unrounded
    pub total_time: f64,
    /// Mean of the per-race average lap times, unrounded
    pub average_lap_time: f64,
    /// Mean per-race population standard deviation of lap times
    pub pacing_variation: f64,
}

/// Everything the metrics engine derives for one swimmer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmerMetrics {
    /// Rounded presentation snapshot
    pub snapshot: MetricsSnapshot,
    /// Full-precision aggregates
    pub raw: RawAggregates,
    /// Swimmer age in years, taken from the first record of the subset
    pub age: u32,
}

/// Per-swimmer metric derivation over an ordered record subset
pub struct MetricsEngine;

impl MetricsEngine {
    /// Compute the metrics snapshot for one swimmer's ordered records.
    ///
    /// Index 0..n-1 of `records` is the race sequence; the ordering matters
    /// for the trend regression and for the first-race velocity.
    ///
    /// # Errors
    ///
    /// Returns a `SWIMMER_NOT_FOUND` error when `records` is empty.
    pub fn compute(swimmer: &str, records: &[&RaceRecord]) -> AppResult<SwimmerMetrics> {
        let Some(first) = records.first() else {
            return Err(AppError::swimmer_not_found(swimmer));
        };

        let totals: Vec<f64> = records.iter().map(|r| r.total_time).collect();
        let lap_means: Vec<f64> = records.iter().map(|r| r.average_lap_time()).collect();
        let distances: Vec<f64> = records
            .iter()
            .map(|r| f64::from(r.distance_meters))
            .collect();
        let lap_deviations: Vec<f64> = records.iter().map(|r| r.lap_time_std_dev()).collect();

        let raw_total_time = StatisticalAnalyzer::mean(&totals);
        let raw_average_lap_time = StatisticalAnalyzer::mean(&lap_means);
        let mean_distance = StatisticalAnalyzer::mean(&distances);
        let pacing_variation = StatisticalAnalyzer::mean(&lap_deviations);

        let velocity = Self::first_race_velocity(first);
        // records is non-empty here, so the fit cannot fail
        let predicted_time =
            StatisticalAnalyzer::linear_regression(&totals)?.predict_at(totals.len() as f64);
        let target_heart_rate = Self::target_heart_rate(first.age, mean_distance);

        let pacing_consistency = if pacing_variation > thresholds::PACING_VARIATION_LIMIT_SECONDS {
            PacingConsistency::Variable
        } else {
            PacingConsistency::Consistent
        };

        Ok(SwimmerMetrics {
            snapshot: MetricsSnapshot {
                total_time: round2(raw_total_time),
                average_lap_time: round2(raw_average_lap_time),
                velocity: round2(velocity),
                distance: round2(mean_distance),
                predicted_time: round2(predicted_time),
                heart_rate: round2(target_heart_rate),
                pacing_consistency,
            },
            raw: RawAggregates {
                total_time: raw_total_time,
                average_lap_time: raw_average_lap_time,
                pacing_variation,
            },
            age: first.age,
        })
    }

    /// Velocity of the first recorded race only, in meters per second:
    /// `distance / (total_time / lap_count)`. Degrades to 0.0 for a race
    /// with no laps or a zero total time.
    fn first_race_velocity(record: &RaceRecord) -> f64 {
        if record.lap_times.is_empty() || record.total_time == 0.0 {
            return 0.0;
        }
        f64::from(record.distance_meters) / (record.total_time / record.lap_times.len() as f64)
    }

    /// Estimated target heart rate: age-predicted maximum scaled by the
    /// zone multiplier the swimmer's mean race distance selects.
    fn target_heart_rate(age: u32, mean_distance: f64) -> f64 {
        let max_heart_rate = heart_rate::MAX_HEART_RATE_BASE - f64::from(age);
        let zone_factor = if mean_distance <= heart_rate::SPRINT_DISTANCE_CEILING_METERS {
            heart_rate::SPRINT_ZONE_FACTOR
        } else if mean_distance <= heart_rate::MIDDLE_DISTANCE_CEILING_METERS {
            heart_rate::MIDDLE_DISTANCE_ZONE_FACTOR
        } else {
            heart_rate::ENDURANCE_ZONE_FACTOR
        };
        max_heart_rate * zone_factor
    }
}

/// Round to two decimal places for presentation
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Utc;

    fn record(distance: u32, laps: Vec<f64>) -> RaceRecord {
        RaceRecord::new("Alice", 20, distance, "Freestyle", laps, Utc::now(), "a.txt")
    }

    #[test]
    fn test_round2() {
        assert!((round2(3.333_333) - 3.33).abs() < 1e-9);
        assert!((round2(169.999_9) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_heart_rate_zone_boundaries() {
        // age 20 -> mhr 200; sprint at 50, middle at 100, endurance above
        assert!((MetricsEngine::target_heart_rate(20, 50.0) - 170.0).abs() < 1e-9);
        assert!((MetricsEngine::target_heart_rate(20, 100.0) - 150.0).abs() < 1e-9);
        assert!((MetricsEngine::target_heart_rate(20, 100.01) - 130.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_guards() {
        let no_laps = record(100, Vec::new());
        assert!(MetricsEngine::first_race_velocity(&no_laps).abs() < f64::EPSILON);
        let zero_total = record(100, vec![0.0, 0.0]);
        assert!(MetricsEngine::first_race_velocity(&zero_total).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_subset_is_not_found() {
        let err = MetricsEngine::compute("Ghost", &[]).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::SwimmerNotFound);
    }
}
