// ABOUTME: Nutrition and menu analytics engine for the Sprout childcare platform
// ABOUTME: Pure, stateless analysis over caller-supplied records; no I/O, no shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! # Sprout Intelligence
//!
//! The analytics core behind the Sprout childcare platform: anthropometric
//! classification, growth-trend analysis, menu nutrition aggregation,
//! allergen conflict detection, and intervention advice.
//!
//! Every entry point is a pure function (or a thin config-holding struct)
//! over caller-supplied records: same inputs, same outputs. The engine never
//! queries storage and never blocks; fetching records and persisting results
//! (including making the same-day assessment upsert atomic) belongs to the
//! calling layer.
//!
//! Numeric thresholds — BMI band cut points, trend tolerances, validation
//! bounds — live in the [`config`] layer seeded from
//! `sprout_core::constants::growth`, so recalibration never touches analysis
//! code.

pub mod advisor;
pub mod allergy;
pub mod anthropometry;
pub mod config;
pub mod growth_trend;
pub mod menu_nutrition;

pub use advisor::{InterventionAdvisor, InterventionPlan, MonitoringFrequency};
pub use allergy::{AllergenMatcher, AllergyConflictChecker, ConflictReport, SubstringAllergenMatch};
pub use anthropometry::{
    AnthropometricClassifier, AssessmentWrite, ClassifiedMeasurement, MeasurementInput,
};
pub use config::EngineConfig;
pub use growth_trend::{GrowthTrend, GrowthTrendAnalyzer, TrendVerdict};
pub use menu_nutrition::{MenuNutritionAggregator, NutritionTotals, TargetComparison};
