// ABOUTME: Race-log filename decoding into swimmer identity and race metadata
// ABOUTME: Builds RaceRecord values from a decoded name plus a comma-separated lap-time body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Record decoding for the `<swimmer>-<age>-<distance>m-<stroke>.txt` schema.
//!
//! The distance and stroke are sub-fields of a single hyphenated segment in
//! the naming convention (`Alice-16-50m-Freestyle.txt`), so the third and
//! fourth dash-separated tokens are rejoined and re-split on the inner dash
//! rather than treated as independent top-level fields.

use crate::corpus::time::parse_lap_time;
use crate::errors::{AppError, AppResult};
use crate::models::RaceRecord;
use chrono::{DateTime, Utc};

/// Decoded components of a race-log filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceLogName {
    /// Swimmer identity token
    pub swimmer: String,
    /// Swimmer age in years
    pub age: u32,
    /// Race distance in meters
    pub distance_meters: u32,
    /// Stroke label
    pub stroke: String,
}

impl RaceLogName {
    /// Decode a filename into its schema components.
    ///
    /// # Errors
    ///
    /// Returns a `MALFORMED_FILENAME` error when the name does not have four
    /// dash-separated segments, the age is not numeric, or the distance
    /// token lacks its literal `m` unit suffix.
    pub fn parse(file_name: &str) -> AppResult<Self> {
        let parts: Vec<&str> = file_name.split('-').collect();
        if parts.len() != 4 {
            return Err(AppError::malformed_filename(format!(
                "'{file_name}' does not match <swimmer>-<age>-<distance>m-<stroke>.txt"
            )));
        }

        let age = parts[1].parse::<u32>().map_err(|e| {
            AppError::malformed_filename(format!(
                "age segment '{}' in '{file_name}' is not numeric",
                parts[1]
            ))
            .with_source(e)
        })?;

        // Distance and stroke are one hyphenated segment; strip the file
        // extension from the stroke half before re-splitting.
        let stroke_token = parts[3].split_once('.').map_or(parts[3], |(stem, _)| stem);
        let distance_stroke = format!("{}-{stroke_token}", parts[2]);
        let Some((distance_token, stroke)) = distance_stroke.split_once('-') else {
            return Err(AppError::malformed_filename(format!(
                "'{file_name}' lacks a distance-stroke segment"
            )));
        };

        let Some(raw_distance) = distance_token.strip_suffix('m') else {
            return Err(AppError::malformed_filename(format!(
                "distance segment '{distance_token}' in '{file_name}' lacks the 'm' unit suffix"
            )));
        };
        let distance_meters = raw_distance.parse::<u32>().map_err(|e| {
            AppError::malformed_filename(format!(
                "distance segment '{distance_token}' in '{file_name}' is not numeric"
            ))
            .with_source(e)
        })?;

        Ok(Self {
            swimmer: parts[0].to_owned(),
            age,
            distance_meters,
            stroke: stroke.to_owned(),
        })
    }

    /// Re-encode the components into the canonical filename
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}-{}-{}m-{}.txt",
            self.swimmer, self.age, self.distance_meters, self.stroke
        )
    }
}

/// Decode one race-log file into a record.
///
/// The body is treated as a single string of comma-separated lap-time
/// tokens; each goes through the best-effort time parser. An empty body
/// yields a record with zero laps and a total time of 0.
///
/// # Errors
///
/// Returns a `MALFORMED_FILENAME` error when the filename fails to decode.
pub fn decode_record(
    file_name: &str,
    body: &str,
    recorded_at: DateTime<Utc>,
) -> AppResult<RaceRecord> {
    let name = RaceLogName::parse(file_name)?;

    let trimmed = body.trim();
    let lap_times: Vec<f64> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(',').map(parse_lap_time).collect()
    };

    Ok(RaceRecord::new(
        name.swimmer,
        name.age,
        name.distance_meters,
        name.stroke,
        lap_times,
        recorded_at,
        file_name,
    ))
}
