// ABOUTME: Anthropometric classification: BMI computation, band classification, validation
// ABOUTME: Also decides update-vs-insert for same-day assessment writes (upsert contract)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Anthropometric classifier
//!
//! Pure functions from raw measurements to BMI and nutrition status. BMI is
//! always recomputed from height and weight here; derived values supplied by
//! callers are never trusted, so a stale or forged BMI cannot reach a stored
//! assessment.

use crate::config::{AnthropometryConfig, EngineConfig};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sprout_core::errors::{EngineError, EngineResult};
use sprout_core::models::{Assessment, NutritionStatus};
use uuid::Uuid;

/// Round to 1 decimal place, the reporting precision for BMI and deltas
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Raw measurement input for classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Standing height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Age in whole months at measurement time, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
}

/// Classification result: derived BMI and nutrition-status category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedMeasurement {
    /// BMI rounded to 1 decimal
    pub bmi: f64,
    /// Nutrition-status category
    pub status: NutritionStatus,
}

/// Write decision for a new assessment against an existing same-day record
///
/// The caller looks up "existing assessment for child + calendar date" and
/// passes the result in; the engine only decides. A second measurement on
/// the same day overwrites the first rather than inserting a duplicate.
/// Making the lookup-then-write sequence atomic (conditional upsert or
/// transaction) is the persistence layer's job.
///
/// Note: the overwrite is destructive by design, with no audit trail of the
/// replaced same-day values. An append-only history with a latest-per-day
/// view is the likely future shape; this enum is the single choke point to
/// change when that is confirmed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum AssessmentWrite {
    /// No record exists for this child and date; insert a new one
    Insert,
    /// A record exists for this child and date; update it in place
    Update {
        /// Identifier of the record to overwrite
        id: Uuid,
    },
}

/// Compute BMI from weight (kg) and height (cm), rounded to 1 decimal
///
/// # Errors
///
/// Returns [`EngineError::InvalidMeasurement`] if either value is
/// non-positive.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> EngineResult<f64> {
    if weight_kg <= 0.0 {
        return Err(EngineError::invalid_measurement("weight_kg", weight_kg));
    }
    if height_cm <= 0.0 {
        return Err(EngineError::invalid_measurement("height_cm", height_cm));
    }
    let height_m = height_cm / 100.0;
    Ok(round1(weight_kg / (height_m * height_m)))
}

/// Anthropometric classifier with configurable cut points
pub struct AnthropometricClassifier {
    config: AnthropometryConfig,
}

impl Default for AnthropometricClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl AnthropometricClassifier {
    /// Create a classifier using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::global().anthropometry.clone(),
        }
    }

    /// Create a classifier with custom configuration
    #[must_use]
    pub const fn with_config(config: AnthropometryConfig) -> Self {
        Self { config }
    }

    /// Classify a BMI value into a nutrition-status category
    ///
    /// Children under the minimum classification age are routed to
    /// individual assessment: fixed BMI bands are meaningless without
    /// age-specific growth charts. An unknown age is classified against
    /// the bands.
    #[must_use]
    pub fn classify(&self, bmi: f64, age_months: Option<u32>) -> NutritionStatus {
        if let Some(age) = age_months {
            if age < self.config.min_classification_age_months {
                return NutritionStatus::NeedsIndividualAssessment;
            }
        }

        let bands = &self.config.bmi_bands;
        if bmi < bands.severe_malnutrition_max {
            NutritionStatus::SevereMalnutrition
        } else if bmi < bands.malnutrition_max {
            NutritionStatus::Malnutrition
        } else if bmi <= bands.normal_max {
            NutritionStatus::Normal
        } else if bmi <= bands.overweight_max {
            NutritionStatus::Overweight
        } else {
            NutritionStatus::Obese
        }
    }

    /// Validate measurements against clinically plausible bounds
    ///
    /// Applied on the assessment-creation path: values outside these ranges
    /// are data-entry errors, not findings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRangeMeasurement`] naming the offending
    /// field and its bounds.
    pub fn validate_measurements(&self, height_cm: f64, weight_kg: f64) -> EngineResult<()> {
        let bounds = &self.config.bounds;
        if height_cm < bounds.height_min_cm || height_cm > bounds.height_max_cm {
            tracing::debug!(height_cm, "rejecting implausible height");
            return Err(EngineError::out_of_range(
                "height_cm",
                height_cm,
                bounds.height_min_cm,
                bounds.height_max_cm,
            ));
        }
        if weight_kg < bounds.weight_min_kg || weight_kg > bounds.weight_max_kg {
            tracing::debug!(weight_kg, "rejecting implausible weight");
            return Err(EngineError::out_of_range(
                "weight_kg",
                weight_kg,
                bounds.weight_min_kg,
                bounds.weight_max_kg,
            ));
        }
        Ok(())
    }

    /// Validate, compute BMI, and classify in one step
    ///
    /// This is the operation behind assessment creation: both derived
    /// fields come out of here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRangeMeasurement`] for implausible
    /// measurements or [`EngineError::InvalidMeasurement`] for non-positive
    /// ones.
    pub fn classify_assessment(
        &self,
        input: MeasurementInput,
    ) -> EngineResult<ClassifiedMeasurement> {
        self.validate_measurements(input.height_cm, input.weight_kg)?;
        let bmi = compute_bmi(input.weight_kg, input.height_cm)?;
        let status = self.classify(bmi, input.age_months);
        Ok(ClassifiedMeasurement { bmi, status })
    }
}

/// Decide between insert and same-day overwrite for an assessment write
///
/// `existing` is the caller's lookup result for this child and calendar
/// date. A record for a different child or date is ignored (defends against
/// a caller passing the wrong row).
#[must_use]
pub fn resolve_assessment_write(
    existing: Option<&Assessment>,
    child_id: Uuid,
    date: NaiveDate,
) -> AssessmentWrite {
    match existing {
        Some(record) if record.child_id == child_id && record.date == date => {
            tracing::debug!(%child_id, %date, "same-day assessment exists, overwriting");
            AssessmentWrite::Update { id: record.id }
        }
        _ => AssessmentWrite::Insert,
    }
}
