// ABOUTME: Unified error taxonomy for the nutrition and menu analytics engine
// ABOUTME: Validation failures carry field names, offending values, and expected bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! # Engine Error Taxonomy
//!
//! Every variant here is a rejected input, not a system failure: surfaced
//! immediately to the caller, never retried, never fatal to the process.
//! Each carries enough detail (field, offending value, expected range) for
//! the calling layer to render a user-facing message without re-inspecting
//! the input.
//!
//! Absence of data is deliberately NOT an error. Growth analysis over too few
//! assessments reports an `insufficient_data` status, and an allergy check
//! over a child with no recorded allergies reports an empty conflict list,
//! because both are expected, common cases.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used across the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

/// Nutrient named in a target comparison failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Fat (g)
    Fat,
    /// Carbohydrates (g)
    Carbs,
}

impl Nutrient {
    /// Human-readable nutrient label for error messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbs => "carbs",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors surfaced by the analytics engine
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A measurement was non-positive where a positive value is required
    #[error("invalid {field}: {value} (must be positive)")]
    InvalidMeasurement {
        /// Name of the offending field (e.g. "height_cm")
        field: &'static str,
        /// Value supplied by the caller
        value: f64,
    },

    /// A measurement fell outside clinically plausible bounds
    #[error("{field} {value} outside plausible range [{min}, {max}]")]
    OutOfRangeMeasurement {
        /// Name of the offending field (e.g. "weight_kg")
        field: &'static str,
        /// Value supplied by the caller
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// A menu with zero dish lines was submitted for aggregation
    #[error("menu {menu_id} has no dish lines to aggregate")]
    EmptyMenu {
        /// Identifier of the offending menu
        menu_id: uuid::Uuid,
    },

    /// A daily target had a zero/absent value for a requested nutrient
    #[error("daily target has no {nutrient} value; cannot compute percentage")]
    MissingTarget {
        /// Nutrient whose target value was zero or absent
        nutrient: Nutrient,
    },
}

impl EngineError {
    /// Non-positive measurement rejection
    #[must_use]
    pub const fn invalid_measurement(field: &'static str, value: f64) -> Self {
        Self::InvalidMeasurement { field, value }
    }

    /// Out-of-plausible-range measurement rejection
    #[must_use]
    pub const fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRangeMeasurement {
            field,
            value,
            min,
            max,
        }
    }

    /// Empty menu rejection
    #[must_use]
    pub const fn empty_menu(menu_id: uuid::Uuid) -> Self {
        Self::EmptyMenu { menu_id }
    }

    /// Missing target value rejection
    #[must_use]
    pub const fn missing_target(nutrient: Nutrient) -> Self {
        Self::MissingTarget { nutrient }
    }
}
