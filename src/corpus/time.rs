// ABOUTME: Best-effort lap-time parsing from "MM:SS[.ff]" strings
// ABOUTME: Malformed tokens degrade to zero seconds with a logged diagnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

use tracing::warn;

/// Parse a lap-time token of the form `MM:SS` (fields may be fractional,
/// e.g. `1:23.45`) into seconds.
///
/// A token that does not split into exactly two numeric fields is reported
/// as a diagnostic and degrades to 0.0 seconds, so one corrupt lap never
/// aborts ingestion of the rest of the file.
#[must_use]
pub fn parse_lap_time(token: &str) -> f64 {
    let trimmed = token.trim();
    let mut fields = trimmed.split(':');
    if let (Some(minutes), Some(seconds), None) = (fields.next(), fields.next(), fields.next()) {
        if let (Ok(minutes), Ok(seconds)) =
            (minutes.trim().parse::<f64>(), seconds.trim().parse::<f64>())
        {
            return minutes.mul_add(60.0, seconds);
        }
    }
    warn!(token = %trimmed, "unparseable lap time, recording as zero");
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert!((parse_lap_time("1:30") - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero() {
        assert!(parse_lap_time("0:00").abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_seconds() {
        assert!((parse_lap_time("1:23.45") - 83.45).abs() < 1e-9);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!((parse_lap_time(" 0:45 ") - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        assert!(parse_lap_time("garbage").abs() < f64::EPSILON);
    }

    #[test]
    fn test_wrong_field_count_degrades_to_zero() {
        assert!(parse_lap_time("90").abs() < f64::EPSILON);
        assert!(parse_lap_time("1:02:03").abs() < f64::EPSILON);
        assert!(parse_lap_time("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_field_degrades_to_zero() {
        assert!(parse_lap_time("one:30").abs() < f64::EPSILON);
    }
}
