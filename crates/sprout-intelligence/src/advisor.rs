// ABOUTME: Nutrition intervention advisor composing classification and trend into recommendations
// ABOUTME: Deterministic decision table keyed by nutrition status and reported appetite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Nutrition intervention advisor
//!
//! The integration point of the engine: consumes the classifier's category,
//! the trend analyzer's verdict, and the qualitative assessment fields, and
//! emits a structured recommendation bundle. No numeric algorithm of its
//! own — a deterministic decision table, so identical inputs always produce
//! the identical plan.

use crate::config::{AdvisorConfig, EngineConfig};
use crate::growth_trend::TrendVerdict;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use sprout_core::constants::growth::monitoring;
use sprout_core::models::{ActivityLevel, Appetite, NutritionStatus};

/// How often a child should be re-assessed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MonitoringFrequency {
    /// Re-assess every week
    Weekly,
    /// Re-assess every two weeks
    BiWeekly,
    /// Re-assess every month
    Monthly,
}

impl MonitoringFrequency {
    /// Suggested re-assessment interval in days
    #[must_use]
    pub const fn interval_days(self) -> i64 {
        match self {
            Self::Weekly => monitoring::WEEKLY_INTERVAL_DAYS,
            Self::BiWeekly => monitoring::BIWEEKLY_INTERVAL_DAYS,
            Self::Monthly => monitoring::MONTHLY_INTERVAL_DAYS,
        }
    }

    /// Next assessment due date counted from an assessment date
    ///
    /// Callers use this to fill `Assessment::next_due` when persisting.
    #[must_use]
    pub fn next_due_from(self, assessed_on: NaiveDate) -> NaiveDate {
        assessed_on + Duration::days(self.interval_days())
    }
}

/// Weight-direction goal for the coming month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionGoal {
    /// Target weight change per month (kg; negative means reduction focus)
    pub target_monthly_weight_delta_kg: f64,
    /// One-line goal statement
    pub summary: String,
}

/// Structured recommendation bundle for one child
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionPlan {
    /// Nutrition status the plan was built for
    pub status: NutritionStatus,
    /// Weight-direction goal
    pub goal: NutritionGoal,
    /// Dietary recommendations (calorie direction, texture, variety)
    pub dietary: Vec<String>,
    /// Physical activity suggestions
    pub activity: Vec<String>,
    /// Feeding-behavior suggestions (populated when appetite is poor)
    pub feeding_behavior: Vec<String>,
    /// Allergen names to exclude from served dishes (verbatim)
    pub avoid: Vec<String>,
    /// Monitoring cadence
    pub monitoring: MonitoringFrequency,
}

/// Intervention advisor with configurable goals and message templates
pub struct InterventionAdvisor {
    config: AdvisorConfig,
}

impl Default for InterventionAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl InterventionAdvisor {
    /// Create an advisor using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::global().advisor.clone(),
        }
    }

    /// Create an advisor with custom configuration
    #[must_use]
    pub const fn with_config(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Build a recommendation bundle from the latest assessment outputs
    ///
    /// Deterministic over its inputs; never fails. Poor appetite appends
    /// feeding-behavior suggestions regardless of BMI category, and a
    /// non-empty allergy list always appends an avoidance list.
    #[must_use]
    pub fn advise(
        &self,
        status: NutritionStatus,
        verdict: TrendVerdict,
        appetite: Appetite,
        activity_level: ActivityLevel,
        allergies: &[String],
    ) -> InterventionPlan {
        let goals = &self.config.goals;
        let increase = goals.calorie_increase_percent;
        let reduction = goals.calorie_reduction_percent;

        let (goal, mut dietary, mut activity) = match status {
            NutritionStatus::SevereMalnutrition => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: goals.severe_gain_kg_per_month,
                    summary: format!(
                        "Regain weight: +{:.1} kg over the next month",
                        goals.severe_gain_kg_per_month
                    ),
                },
                vec![
                    format!("Increase daily calories by about {increase}%"),
                    "Prioritize energy-dense foods (full-fat dairy, eggs, nut-free spreads)"
                        .into(),
                    "Add a fortified afternoon snack between main meals".into(),
                ],
                vec!["Keep activity light until weight stabilizes; short free play only".into()],
            ),
            NutritionStatus::Malnutrition => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: goals.moderate_gain_kg_per_month,
                    summary: format!(
                        "Steady weight gain: +{:.1} kg over the next month",
                        goals.moderate_gain_kg_per_month
                    ),
                },
                vec![
                    format!("Increase daily calories by about {}%", increase / 2),
                    "Offer an extra protein serving at lunch".into(),
                    "Rotate textures and colors to keep meals appealing".into(),
                ],
                vec!["Normal group play; avoid prolonged high-exertion games".into()],
            ),
            NutritionStatus::Normal => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: 0.0,
                    summary: "Maintain current growth curve".into(),
                },
                vec![
                    "Keep the current balanced menu".into(),
                    "Continue introducing seasonal variety".into(),
                ],
                vec!["Standard daily outdoor play".into()],
            ),
            NutritionStatus::Overweight => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: 0.0,
                    summary: "Hold weight steady while height catches up".into(),
                },
                vec![
                    format!("Trim daily calories by about {}%", reduction / 2),
                    "Swap sweetened drinks and desserts for fruit and water".into(),
                    "Serve vegetables first when appetite is highest".into(),
                ],
                vec![
                    "Add one structured movement session per day".into(),
                    "Encourage walking games over seated activities".into(),
                ],
            ),
            NutritionStatus::Obese => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: -goals.moderate_gain_kg_per_month,
                    summary: format!(
                        "Gentle reduction: -{:.1} kg over the next month",
                        goals.moderate_gain_kg_per_month
                    ),
                },
                vec![
                    format!("Trim daily calories by about {reduction}%"),
                    "Remove sweetened drinks and second helpings of starches".into(),
                    "Keep protein and vegetable portions unchanged".into(),
                ],
                vec![
                    "Daily structured active play, building up duration gradually".into(),
                    "Involve the family in after-hours activity habits".into(),
                ],
            ),
            NutritionStatus::NeedsIndividualAssessment => (
                NutritionGoal {
                    target_monthly_weight_delta_kg: 0.0,
                    summary: "Refer for age-specific growth chart assessment".into(),
                },
                vec!["No band-based dietary change; follow individual assessment".into()],
                vec!["Age-appropriate free play".into()],
            ),
        };

        match verdict {
            TrendVerdict::NeedsAttention => {
                dietary.push(self.config.messages.trend_attention_note.clone());
            }
            TrendVerdict::RapidWeightGain | TrendVerdict::RapidWeightLoss => {
                dietary.push(self.config.messages.trend_rapid_change_note.clone());
            }
            _ => {}
        }

        if activity_level == ActivityLevel::Low
            && !matches!(status, NutritionStatus::SevereMalnutrition)
        {
            activity.push("Reported activity is low - schedule short movement breaks".into());
        }

        let feeding_behavior = if appetite == Appetite::Poor {
            vec![
                self.config.messages.poor_appetite_intro.clone(),
                self.config.messages.poor_appetite_small_meals.clone(),
                self.config.messages.poor_appetite_environment.clone(),
            ]
        } else {
            Vec::new()
        };

        let avoid = if allergies.is_empty() {
            Vec::new()
        } else {
            let mut list = vec![self.config.messages.avoidance_intro.clone()];
            list.extend(allergies.iter().cloned());
            list
        };

        InterventionPlan {
            status,
            goal,
            dietary,
            activity,
            feeding_behavior,
            avoid,
            monitoring: monitoring_frequency(status),
        }
    }
}

/// Monitoring cadence keyed by nutrition-status severity
#[must_use]
pub const fn monitoring_frequency(status: NutritionStatus) -> MonitoringFrequency {
    match status {
        NutritionStatus::Obese | NutritionStatus::SevereMalnutrition => {
            MonitoringFrequency::Weekly
        }
        NutritionStatus::Malnutrition | NutritionStatus::Overweight => {
            MonitoringFrequency::BiWeekly
        }
        NutritionStatus::Normal | NutritionStatus::NeedsIndividualAssessment => {
            MonitoringFrequency::Monthly
        }
    }
}
