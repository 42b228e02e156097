// ABOUTME: Coaching recommendation engine mapping metrics to textual remarks
// ABOUTME: Fixed thresholds, evaluated independently, emitted in a stable order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Coaching recommendation engine.
//!
//! Maps a swimmer's metrics snapshot against fixed thresholds to produce
//! zero or more specific coaching remarks plus one general pacing remark
//! that always accompanies them. The metric checks compare the rounded
//! snapshot values (the figures the coach is shown), while the pacing
//! remark uses the raw variation signal.

use crate::intelligence::metrics::{MetricsSnapshot, RawAggregates};
use crate::intelligence::physiological_constants::thresholds;
use serde::{Deserialize, Serialize};

/// One general pacing remark plus ordered specific remarks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    /// Pacing-consistency remark, always present
    pub general_remark: String,
    /// Threshold-triggered coaching suggestions, in evaluation order
    pub specific_remarks: Vec<String>,
}

/// Threshold-based recommendation generation
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Evaluate the fixed coaching thresholds against a metrics snapshot.
    ///
    /// All conditions are checked independently and may fire together; the
    /// two heart-rate checks and the two trend checks are each mutually
    /// exclusive pairs. Emission order equals evaluation order.
    #[must_use]
    pub fn recommend(snapshot: &MetricsSnapshot, raw: &RawAggregates) -> RecommendationSet {
        let mut specific_remarks = Vec::new();

        if snapshot.average_lap_time > thresholds::HIGH_AVERAGE_LAP_TIME_SECONDS {
            specific_remarks.push(
                "Your average lap time is higher than expected. Consider focusing on refining \
                 your stroke technique and building endurance."
                    .to_owned(),
            );
        }

        if snapshot.velocity < thresholds::LOW_VELOCITY_METERS_PER_SECOND {
            specific_remarks.push(
                "Your velocity could be improved. Focus on increasing your stroke efficiency \
                 and power to swim faster."
                    .to_owned(),
            );
        }

        if snapshot.heart_rate < thresholds::LOW_TARGET_HEART_RATE_BPM {
            specific_remarks.push(
                "Your heart rate during longer swims is consistently low. Consider increasing \
                 the intensity of your workouts."
                    .to_owned(),
            );
        } else if snapshot.heart_rate > thresholds::HIGH_TARGET_HEART_RATE_BPM {
            specific_remarks.push(
                "Your heart rate during longer swims is consistently high. Focus on pacing \
                 yourself more effectively to avoid overexertion."
                    .to_owned(),
            );
        }

        if snapshot.predicted_time > snapshot.total_time * thresholds::DECLINE_TREND_RATIO {
            specific_remarks.push(
                "Your predicted time shows a potential decrease in performance. Review your \
                 training strategy to identify areas for improvement."
                    .to_owned(),
            );
        } else if snapshot.predicted_time < snapshot.total_time * thresholds::IMPROVEMENT_TREND_RATIO
        {
            specific_remarks.push(
                "Your predicted time shows a potential improvement. Continue with your current \
                 training strategy to maximize your performance."
                    .to_owned(),
            );
        }

        let general_remark = if raw.pacing_variation > thresholds::PACING_VARIATION_LIMIT_SECONDS {
            "Focus on maintaining a consistent pace throughout the race.".to_owned()
        } else {
            "Your pacing is relatively consistent. Keep up the good work!".to_owned()
        };

        RecommendationSet {
            general_remark,
            specific_remarks,
        }
    }
}
