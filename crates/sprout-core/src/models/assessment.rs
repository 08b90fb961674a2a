// ABOUTME: Anthropometric assessment record with derived BMI and nutrition status
// ABOUTME: Qualitative enums (Appetite, ActivityLevel, Mood) with lossy string parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nutrition-status category derived from BMI band classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionStatus {
    /// BMI below the severe-malnutrition cut point
    SevereMalnutrition,
    /// BMI in the malnutrition band
    Malnutrition,
    /// BMI in the normal band
    Normal,
    /// BMI in the overweight band
    Overweight,
    /// BMI above the overweight band
    Obese,
    /// Under the minimum age for fixed-band classification; needs
    /// age-specific growth charts
    NeedsIndividualAssessment,
}

/// Reported appetite at assessment time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Appetite {
    /// Eats well at most meals
    Good,
    /// Inconsistent eating
    Fair,
    /// Regularly refuses or barely touches meals
    Poor,
}

impl Appetite {
    /// Parse appetite from free-text caregiver input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "poor" | "bad" => Self::Poor,
            "fair" | "average" | "ok" => Self::Fair,
            "good" | "" => Self::Good,
            other => {
                tracing::trace!(appetite = other, "unrecognized appetite, defaulting to good");
                Self::Good
            }
        }
    }
}

/// Reported physical activity level at assessment time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Rarely joins physical play
    Low,
    /// Typical participation
    Moderate,
    /// Constantly active
    High,
}

impl ActivityLevel {
    /// Parse activity level from free-text caregiver input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" | "sedentary" => Self::Low,
            "high" | "active" | "very active" => Self::High,
            _ => Self::Moderate,
        }
    }
}

/// Reported mood at assessment time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Content and engaged
    Happy,
    /// Unremarkable
    Neutral,
    /// Withdrawn or irritable
    Unsettled,
}

impl Mood {
    /// Parse mood from free-text caregiver input
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "happy" | "cheerful" => Self::Happy,
            "unsettled" | "irritable" | "sad" | "withdrawn" => Self::Unsettled,
            _ => Self::Neutral,
        }
    }
}

/// One dated anthropometric assessment for a child
///
/// One record per child per calendar day: a second measurement on the same
/// day overwrites the first (the engine's write decision in
/// `sprout-intelligence::anthropometry` chooses update over insert).
/// `bmi` and `status` are derived fields, recomputed from height and weight
/// on every write; values supplied by callers are never trusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier
    pub id: Uuid,
    /// Child this assessment belongs to
    pub child_id: Uuid,
    /// Calendar day of the measurement
    pub date: NaiveDate,
    /// Standing height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Derived BMI, rounded to 1 decimal
    pub bmi: f64,
    /// Derived nutrition-status category
    pub status: NutritionStatus,
    /// Reported appetite
    pub appetite: Appetite,
    /// Reported activity level
    pub activity_level: ActivityLevel,
    /// Reported mood
    pub mood: Mood,
    /// Caregiver notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Suggested date for the next assessment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due: Option<NaiveDate>,
}
