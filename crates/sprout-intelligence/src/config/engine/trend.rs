// ABOUTME: Growth trend analyzer configuration: stability tolerance and rapid-change thresholds
// ABOUTME: Defaults seeded from sprout-core growth reference constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Growth Trend Analyzer Configuration

use serde::{Deserialize, Serialize};
use sprout_core::constants::growth::trend;

/// Growth trend analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Absolute BMI drift tolerated within a "good growth" verdict
    pub bmi_stability_tolerance: f64,
    /// BMI increase between window endpoints flagged as rapid weight gain
    pub rapid_bmi_gain: f64,
    /// BMI decrease between window endpoints flagged as rapid weight loss
    /// (negative value)
    pub rapid_bmi_loss: f64,
    /// Days counted as one month when reporting elapsed whole months
    pub days_per_month: i64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            bmi_stability_tolerance: trend::BMI_STABILITY_TOLERANCE,
            rapid_bmi_gain: trend::RAPID_BMI_GAIN,
            rapid_bmi_loss: trend::RAPID_BMI_LOSS,
            days_per_month: trend::DAYS_PER_MONTH,
        }
    }
}
