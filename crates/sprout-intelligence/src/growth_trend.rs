// ABOUTME: Growth trend analysis over a child's ordered assessment series
// ABOUTME: Compares window endpoints, reports deltas per month and a trend verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Growth trend analyzer
//!
//! Consumes one child's assessments (any order; sorted by date internally)
//! and compares the earliest and latest points of the supplied window.
//! Never fails: too little history is an expected case reported as an
//! `insufficient_data` verdict, not an error.

use crate::anthropometry::round1;
use crate::config::{EngineConfig, TrendConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprout_core::models::Assessment;

/// Categorical summary of growth direction between two assessments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendVerdict {
    /// Fewer than two assessments in the window
    InsufficientData,
    /// Height and weight both increased with stable BMI
    GoodGrowth,
    /// Height or weight decreased
    NeedsAttention,
    /// BMI rose faster than the rapid-gain threshold
    RapidWeightGain,
    /// BMI fell faster than the rapid-loss threshold
    RapidWeightLoss,
    /// None of the above
    Normal,
}

/// Growth trend between the earliest and latest assessments of a window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthTrend {
    /// Trend verdict
    pub verdict: TrendVerdict,
    /// Number of assessments considered
    pub assessments: usize,
    /// Date of the earliest assessment in the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_start: Option<NaiveDate>,
    /// Date of the latest assessment in the window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_end: Option<NaiveDate>,
    /// Height change over the window (cm, 1 decimal)
    pub height_change_cm: f64,
    /// Weight change over the window (kg, 1 decimal)
    pub weight_change_kg: f64,
    /// BMI change over the window (1 decimal)
    pub bmi_change: f64,
    /// Elapsed time in whole months (ceiling of days / 30)
    pub elapsed_months: u32,
    /// Average height change per elapsed month (0 when under a month)
    pub height_change_per_month: f64,
    /// Average weight change per elapsed month (0 when under a month)
    pub weight_change_per_month: f64,
}

impl GrowthTrend {
    fn insufficient(count: usize) -> Self {
        Self {
            verdict: TrendVerdict::InsufficientData,
            assessments: count,
            window_start: None,
            window_end: None,
            height_change_cm: 0.0,
            weight_change_kg: 0.0,
            bmi_change: 0.0,
            elapsed_months: 0,
            height_change_per_month: 0.0,
            weight_change_per_month: 0.0,
        }
    }
}

/// Growth trend analyzer with configurable change thresholds
pub struct GrowthTrendAnalyzer {
    config: TrendConfig,
}

impl Default for GrowthTrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthTrendAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::global().trend.clone(),
        }
    }

    /// Create an analyzer with custom configuration
    #[must_use]
    pub const fn with_config(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Analyze growth over one child's assessment window
    ///
    /// The caller guarantees all assessments belong to the same child;
    /// ordering is not required. The comparison is between the earliest and
    /// latest points of the window, not adjacent entries.
    #[must_use]
    pub fn analyze(&self, assessments: &[Assessment]) -> GrowthTrend {
        if assessments.len() < 2 {
            return GrowthTrend::insufficient(assessments.len());
        }

        let mut ordered: Vec<&Assessment> = assessments.iter().collect();
        ordered.sort_by_key(|a| a.date);
        // Safe: len >= 2 checked above
        let (earliest, latest) = (ordered[0], ordered[ordered.len() - 1]);

        let height_change = round1(latest.height_cm - earliest.height_cm);
        let weight_change = round1(latest.weight_kg - earliest.weight_kg);
        let bmi_change = round1(latest.bmi - earliest.bmi);

        let elapsed_days = (latest.date - earliest.date).num_days().max(0);
        let elapsed_months =
            u32::try_from((elapsed_days as u64).div_ceil(self.config.days_per_month as u64))
                .unwrap_or(u32::MAX);

        let (height_per_month, weight_per_month) = if elapsed_months > 0 {
            let months = f64::from(elapsed_months);
            (height_change / months, weight_change / months)
        } else {
            (0.0, 0.0)
        };

        let verdict = self.verdict(height_change, weight_change, bmi_change);

        GrowthTrend {
            verdict,
            assessments: assessments.len(),
            window_start: Some(earliest.date),
            window_end: Some(latest.date),
            height_change_cm: height_change,
            weight_change_kg: weight_change,
            bmi_change,
            elapsed_months,
            height_change_per_month: height_per_month,
            weight_change_per_month: weight_per_month,
        }
    }

    // Rules evaluated in a fixed order; the first match wins. A shrinking
    // measurement outranks a rapid BMI change so re-measurement advice comes
    // before diet advice.
    fn verdict(&self, height_change: f64, weight_change: f64, bmi_change: f64) -> TrendVerdict {
        if height_change > 0.0
            && weight_change > 0.0
            && bmi_change.abs() < self.config.bmi_stability_tolerance
        {
            TrendVerdict::GoodGrowth
        } else if height_change < 0.0 || weight_change < 0.0 {
            TrendVerdict::NeedsAttention
        } else if bmi_change > self.config.rapid_bmi_gain {
            TrendVerdict::RapidWeightGain
        } else if bmi_change < self.config.rapid_bmi_loss {
            TrendVerdict::RapidWeightLoss
        } else {
            TrendVerdict::Normal
        }
    }
}
