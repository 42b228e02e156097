// ABOUTME: Progress chart rendering for swimmer analysis responses
// ABOUTME: Two-panel SVG (total-time trend, per-stroke lap-time bars) as a data URI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics

//! Chart rendering for the presentation layer.
//!
//! Produces the two-panel progress chart embedded in analysis responses:
//! the left panel plots total race time against race sequence, the right
//! panel bars of per-race average lap time against distance, one color per
//! stroke. Rendered to an in-memory SVG and returned as a base64 data URI
//! so the landing page can drop it straight into an `<img>` tag.

use crate::errors::{AppError, AppResult};
use crate::models::RaceRecord;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Overall chart size in pixels
const CHART_SIZE: (u32, u32) = (1200, 600);

/// Bar width in distance units, matching one lane of the distance axis
const BAR_HALF_WIDTH_METERS: f64 = 5.0;

/// Render the progress chart for one swimmer's ordered records.
///
/// # Errors
///
/// Returns a `SWIMMER_NOT_FOUND` error for an empty record subset and a
/// `RENDER_ERROR` when drawing fails.
pub fn render_progress_chart(swimmer: &str, records: &[&RaceRecord]) -> AppResult<String> {
    if records.is_empty() {
        return Err(AppError::swimmer_not_found(swimmer));
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let (left, right) = root.split_horizontally((CHART_SIZE.0 / 2) as i32);
        draw_total_time_panel(&left, swimmer, records)?;
        draw_lap_time_panel(&right, swimmer, records)?;

        root.present().map_err(chart_err)?;
    }

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(svg.as_bytes())
    ))
}

/// Left panel: total race time over the race sequence
fn draw_total_time_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    swimmer: &str,
    records: &[&RaceRecord],
) -> AppResult<()> {
    let max_total = records
        .iter()
        .map(|r| r.total_time)
        .fold(0.0_f64, f64::max);
    let x_max = records.len().saturating_sub(1).max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{swimmer} - Total Race Times"), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5..x_max + 0.5, 0.0..max_total.mul_add(1.1, 1.0))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Race")
        .y_desc("Total Time (seconds)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64, r.total_time)),
            &BLUE,
        ))
        .map_err(chart_err)?;
    chart
        .draw_series(
            records
                .iter()
                .enumerate()
                .map(|(i, r)| Circle::new((i as f64, r.total_time), 3, BLUE.filled())),
        )
        .map_err(chart_err)?;

    Ok(())
}

/// Right panel: per-race average lap time by distance, one color per stroke
fn draw_lap_time_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    swimmer: &str,
    records: &[&RaceRecord],
) -> AppResult<()> {
    let max_lap = records
        .iter()
        .map(|r| r.average_lap_time())
        .fold(0.0_f64, f64::max);
    let max_distance = records
        .iter()
        .map(|r| f64::from(r.distance_meters))
        .fold(0.0_f64, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{swimmer} - Average Lap Times by Distance and Stroke"),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            0.0..max_distance + BAR_HALF_WIDTH_METERS * 4.0,
            0.0..max_lap.mul_add(1.1, 1.0),
        )
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Average Lap Time (seconds)")
        .draw()
        .map_err(chart_err)?;

    let mut strokes: Vec<&str> = records.iter().map(|r| r.stroke.as_str()).collect();
    strokes.sort_unstable();
    strokes.dedup();

    for (idx, stroke) in strokes.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(
                records
                    .iter()
                    .filter(|r| r.stroke == *stroke)
                    .map(|r| {
                        let x = f64::from(r.distance_meters);
                        Rectangle::new(
                            [
                                (x - BAR_HALF_WIDTH_METERS, 0.0),
                                (x + BAR_HALF_WIDTH_METERS, r.average_lap_time()),
                            ],
                            color.filled(),
                        )
                    }),
            )
            .map_err(chart_err)?
            .label(*stroke)
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], color.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

/// Map a plotters drawing failure into the unified error type
fn chart_err(err: impl std::fmt::Display) -> AppError {
    AppError::render(format!("chart rendering failed: {err}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::Utc;

    fn record(distance: u32, stroke: &str, laps: Vec<f64>) -> RaceRecord {
        RaceRecord::new("Alice", 16, distance, stroke, laps, Utc::now(), "a.txt")
    }

    #[test]
    fn test_renders_svg_data_uri() {
        let first = record(50, "Freestyle", vec![30.0, 31.0]);
        let second = record(100, "Butterfly", vec![40.0, 41.0, 39.0, 40.0]);
        let records = vec![&first, &second];

        let uri = render_progress_chart("Alice", &records).unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));

        let payload = uri.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(payload).unwrap();
        let svg = String::from_utf8(decoded).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Total Race Times"));
    }

    #[test]
    fn test_single_record_renders() {
        let only = record(50, "Freestyle", vec![30.0]);
        let records = vec![&only];
        assert!(render_progress_chart("Alice", &records).is_ok());
    }

    #[test]
    fn test_empty_subset_is_not_found() {
        let err = render_progress_chart("Ghost", &[]).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::SwimmerNotFound);
    }
}
