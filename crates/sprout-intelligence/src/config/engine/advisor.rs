// ABOUTME: Intervention advisor configuration for dietary and activity recommendations
// ABOUTME: Goal magnitudes and message templates keyed into the advisor decision table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Intervention Advisor Configuration
//!
//! Goal magnitudes and template messages for the recommendation decision
//! table. Category-specific suggestions stay in the advisor itself; what
//! lives here is the text and the numbers a nutritionist is likely to tune.

use serde::{Deserialize, Serialize};

/// Intervention advisor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Goal magnitudes for weight-direction targets
    pub goals: AdvisorGoals,
    /// Template messages appended by cross-cutting rules
    pub messages: AdvisorMessages,
}

/// Target monthly weight deltas by nutrition-status direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorGoals {
    /// Monthly weight gain target (kg) for severely malnourished children
    pub severe_gain_kg_per_month: f64,
    /// Monthly weight gain target (kg) for malnourished children
    pub moderate_gain_kg_per_month: f64,
    /// Calorie increase suggested for underweight categories (percent)
    pub calorie_increase_percent: u32,
    /// Calorie reduction suggested for overweight categories (percent)
    pub calorie_reduction_percent: u32,
}

/// Template messages appended by cross-cutting advisor rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorMessages {
    /// Opening line of feeding-behavior guidance for poor appetite
    pub poor_appetite_intro: String,
    /// Smaller, more frequent meals suggestion
    pub poor_appetite_small_meals: String,
    /// Mealtime environment suggestion
    pub poor_appetite_environment: String,
    /// Prefix for the allergen avoidance list
    pub avoidance_intro: String,
    /// Note appended when the growth trend needs attention
    pub trend_attention_note: String,
    /// Note appended on rapid BMI change in either direction
    pub trend_rapid_change_note: String,
}

impl Default for AdvisorGoals {
    fn default() -> Self {
        Self {
            severe_gain_kg_per_month: 0.5,
            moderate_gain_kg_per_month: 0.3,
            calorie_increase_percent: 20,
            calorie_reduction_percent: 15,
        }
    }
}

impl Default for AdvisorMessages {
    fn default() -> Self {
        Self {
            poor_appetite_intro: "Appetite is reported poor - address feeding behavior first"
                .into(),
            poor_appetite_small_meals: "Offer smaller portions more often (5-6 mini-meals)".into(),
            poor_appetite_environment:
                "Keep mealtimes calm and screen-free; let the child self-serve where possible"
                    .into(),
            avoidance_intro: "Exclude from all served dishes".into(),
            trend_attention_note:
                "Recent measurements moved in the wrong direction - verify with a re-measurement"
                    .into(),
            trend_rapid_change_note:
                "BMI changed rapidly since the previous assessment - review portions and snacks"
                    .to_owned(),
        }
    }
}
