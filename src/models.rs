// ABOUTME: Race record data model with derived per-race statistics
// ABOUTME: One RaceRecord per decoded race-log file, immutable after corpus load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One decoded race-log file: a single race swum by a single swimmer.
///
/// Records are created once at corpus-load time and never mutated. The
/// `total_time` field is derived from the lap times by the constructor and
/// always equals their sum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceRecord {
    /// Swimmer identity token from the filename; not validated against a roster
    pub swimmer: String,
    /// Swimmer age in years, taken from the filename of this race's log
    pub age: u32,
    /// Race distance in meters
    pub distance_meters: u32,
    /// Stroke label (free-form, e.g. "Freestyle", "Butterfly")
    pub stroke: String,
    /// Lap times in seconds, in file order (= lap order)
    pub lap_times: Vec<f64>,
    /// Total race time in seconds; always the sum of `lap_times`
    pub total_time: f64,
    /// Source file modification time; the explicit race-sequence ordering key
    pub recorded_at: DateTime<Utc>,
    /// Originating file name, for diagnostics and ordering tiebreaks
    pub source: String,
}

impl RaceRecord {
    /// Build a record from decoded filename metadata and parsed lap times.
    ///
    /// `total_time` is computed here so the sum invariant cannot drift.
    #[must_use]
    pub fn new(
        swimmer: impl Into<String>,
        age: u32,
        distance_meters: u32,
        stroke: impl Into<String>,
        lap_times: Vec<f64>,
        recorded_at: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        let total_time = lap_times.iter().sum();
        Self {
            swimmer: swimmer.into(),
            age,
            distance_meters,
            stroke: stroke.into(),
            lap_times,
            total_time,
            recorded_at,
            source: source.into(),
        }
    }

    /// Number of laps in this race
    #[must_use]
    pub fn lap_count(&self) -> usize {
        self.lap_times.len()
    }

    /// Mean lap time in seconds; 0.0 for a race with no laps
    #[must_use]
    pub fn average_lap_time(&self) -> f64 {
        if self.lap_times.is_empty() {
            return 0.0;
        }
        self.total_time / self.lap_times.len() as f64
    }

    /// Population standard deviation of this race's lap times; 0.0 with no laps
    #[must_use]
    pub fn lap_time_std_dev(&self) -> f64 {
        crate::intelligence::statistical_analysis::StatisticalAnalyzer::population_std_dev(
            &self.lap_times,
        )
    }
}
