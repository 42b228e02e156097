// ABOUTME: Statistical analysis engine for performance trend calculations
// ABOUTME: Implements linear regression over the race sequence plus descriptive statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Poolside Analytics
#![allow(clippy::cast_precision_loss)] // Safe: statistical calculations with controlled ranges

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression analysis results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change per race)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
}

impl RegressionResult {
    /// Evaluate the fitted line at the given x value
    #[must_use]
    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Statistical analyzer over ordered observation sequences
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit an ordinary least-squares line through `values`, with the
    /// zero-based observation index as the independent variable.
    ///
    /// A single observation is the conventional degenerate fit: zero slope,
    /// intercept equal to that observation.
    ///
    /// # Errors
    ///
    /// Returns an error when `values` is empty
    pub fn linear_regression(values: &[f64]) -> AppResult<RegressionResult> {
        if values.is_empty() {
            return Err(AppError::invalid_input(
                "cannot fit a regression over zero observations",
            ));
        }
        if values.len() == 1 {
            return Ok(RegressionResult {
                slope: 0.0,
                intercept: values[0],
                r_squared: 1.0,
            });
        }

        let n = values.len() as f64;
        let sum_x = (0..values.len()).map(|i| i as f64).sum::<f64>();
        let sum_y = values.iter().sum::<f64>();
        let sum_xx = (0..values.len()).map(|i| (i * i) as f64).sum::<f64>();
        let sum_xy = values
            .iter()
            .enumerate()
            .map(|(i, y)| i as f64 * y)
            .sum::<f64>();
        let sum_yy = values.iter().map(|y| y * y).sum::<f64>();

        // The index variable always has nonzero variance for n >= 2
        let denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
        let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
        let intercept = slope.mul_add(-sum_x, sum_y) / n;

        let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
        let denominator_corr =
            (n.mul_add(sum_xx, -(sum_x * sum_x)) * n.mul_add(sum_yy, -(sum_y * sum_y))).sqrt();
        let correlation = if denominator_corr == 0.0 {
            0.0
        } else {
            numerator / denominator_corr
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared: correlation * correlation,
        })
    }

    /// Arithmetic mean; 0.0 for an empty sequence
    #[must_use]
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation; 0.0 for an empty sequence
    #[must_use]
    pub fn population_std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(values);
        let variance = values
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / values.len() as f64;
        variance.sqrt()
    }
}
