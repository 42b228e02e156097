// ABOUTME: Physiological constants and coaching thresholds for swim analysis
// ABOUTME: Groups heart-rate zone parameters and recommendation trigger values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Physiological constants used throughout the intelligence analysis.

/// Heart-rate zone parameters
///
/// Age-predicted maximum heart rate follows the classic Fox formula
/// (220 - age); target-zone multipliers step down as race distance grows,
/// since sprints are swum closer to maximum effort than endurance events.
pub mod heart_rate {
    /// Base of the age-predicted maximum heart rate formula (220 - age)
    pub const MAX_HEART_RATE_BASE: f64 = 220.0;

    /// Races at or below this mean distance are treated as sprints
    pub const SPRINT_DISTANCE_CEILING_METERS: f64 = 50.0;

    /// Races at or below this mean distance are treated as middle distance
    pub const MIDDLE_DISTANCE_CEILING_METERS: f64 = 100.0;

    /// Target zone multiplier for sprint distances
    pub const SPRINT_ZONE_FACTOR: f64 = 0.85;

    /// Target zone multiplier for middle distances
    pub const MIDDLE_DISTANCE_ZONE_FACTOR: f64 = 0.75;

    /// Target zone multiplier for endurance distances
    pub const ENDURANCE_ZONE_FACTOR: f64 = 0.65;
}

/// Fixed thresholds the recommendation engine evaluates metrics against
pub mod thresholds {
    /// Average lap times above this many seconds suggest endurance work
    pub const HIGH_AVERAGE_LAP_TIME_SECONDS: f64 = 100.0;

    /// Velocities below this many meters per second suggest efficiency work
    pub const LOW_VELOCITY_METERS_PER_SECOND: f64 = 1.2;

    /// Target heart rates below this suggest raising workout intensity
    pub const LOW_TARGET_HEART_RATE_BPM: f64 = 110.0;

    /// Target heart rates above this suggest pacing back to avoid overexertion
    pub const HIGH_TARGET_HEART_RATE_BPM: f64 = 190.0;

    /// Predicted time above total time by this ratio flags a decline
    pub const DECLINE_TREND_RATIO: f64 = 1.05;

    /// Predicted time below total time by this ratio flags an improvement
    pub const IMPROVEMENT_TREND_RATIO: f64 = 0.95;

    /// Mean per-race lap-time deviation above this many seconds reads as
    /// inconsistent pacing
    pub const PACING_VARIATION_LIMIT_SECONDS: f64 = 5.0;
}
