// ABOUTME: Intelligence module: metric derivation, statistics, and recommendations
// ABOUTME: Shared analysis types for swim performance data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! # Intelligence Module
//!
//! Analytics for swim race data: descriptive statistics and trend
//! regression over the race sequence, physiological heart-rate estimation,
//! and threshold-based coaching recommendations.

/// Per-swimmer metric derivation
pub mod metrics;
/// Physiological constants and coaching thresholds
pub mod physiological_constants;
/// Threshold-based coaching remarks
pub mod recommendation_engine;
/// Regression and descriptive statistics
pub mod statistical_analysis;

pub use metrics::{MetricsEngine, MetricsSnapshot, RawAggregates, SwimmerMetrics};
pub use recommendation_engine::{RecommendationEngine, RecommendationSet};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};

use serde::{Deserialize, Serialize};

/// Pacing-consistency classification of a swimmer's races
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingConsistency {
    /// Lap times hold steady within races
    Consistent,
    /// Lap times swing noticeably within races
    Variable,
}
