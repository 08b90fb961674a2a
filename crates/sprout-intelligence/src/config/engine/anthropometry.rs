// ABOUTME: Anthropometric classifier configuration: BMI bands and measurement bounds
// ABOUTME: Defaults seeded from sprout-core growth reference constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Anthropometric Classifier Configuration
//!
//! BMI band cut points and plausible measurement bounds as recalibratable
//! data. The defaults are the WHO-simplified childcare bands from
//! `sprout_core::constants::growth`; deployments tracking a different
//! reference population override them here without touching classifier code.

use serde::{Deserialize, Serialize};
use sprout_core::constants::growth::{age, bmi_bands, measurement_bounds};

/// Anthropometric classifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropometryConfig {
    /// BMI band cut points for children at or above the classification age
    pub bmi_bands: BmiBands,
    /// Plausible measurement bounds on the assessment-creation path
    pub bounds: MeasurementBounds,
    /// Minimum age (months) for fixed-band BMI classification
    pub min_classification_age_months: u32,
}

/// BMI band cut points
///
/// Bands are half-open below `malnutrition_max` and inclusive on the upper
/// end from the normal band up: BMI < `severe_malnutrition_max` is severe,
/// [severe, malnutrition_max) is malnutrition, up to and including
/// `normal_max` is normal, up to and including `overweight_max` is
/// overweight, and above is obese.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiBands {
    /// Upper bound (exclusive) of the severe-malnutrition band
    pub severe_malnutrition_max: f64,
    /// Upper bound (exclusive) of the malnutrition band
    pub malnutrition_max: f64,
    /// Upper bound (inclusive) of the normal band
    pub normal_max: f64,
    /// Upper bound (inclusive) of the overweight band
    pub overweight_max: f64,
}

/// Plausible measurement bounds (inclusive on both ends)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementBounds {
    /// Minimum plausible height (cm)
    pub height_min_cm: f64,
    /// Maximum plausible height (cm)
    pub height_max_cm: f64,
    /// Minimum plausible weight (kg)
    pub weight_min_kg: f64,
    /// Maximum plausible weight (kg)
    pub weight_max_kg: f64,
}

impl Default for BmiBands {
    fn default() -> Self {
        Self {
            severe_malnutrition_max: bmi_bands::SEVERE_MALNUTRITION_MAX,
            malnutrition_max: bmi_bands::MALNUTRITION_MAX,
            normal_max: bmi_bands::NORMAL_MAX,
            overweight_max: bmi_bands::OVERWEIGHT_MAX,
        }
    }
}

impl Default for MeasurementBounds {
    fn default() -> Self {
        Self {
            height_min_cm: measurement_bounds::HEIGHT_MIN_CM,
            height_max_cm: measurement_bounds::HEIGHT_MAX_CM,
            weight_min_kg: measurement_bounds::WEIGHT_MIN_KG,
            weight_max_kg: measurement_bounds::WEIGHT_MAX_KG,
        }
    }
}

impl Default for AnthropometryConfig {
    fn default() -> Self {
        Self {
            bmi_bands: BmiBands::default(),
            bounds: MeasurementBounds::default(),
            min_classification_age_months: age::BMI_CLASSIFICATION_MIN_MONTHS,
        }
    }
}
