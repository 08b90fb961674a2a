// ABOUTME: Menu nutrition aggregation and comparison against age-band daily targets
// ABOUTME: Per-menu macro summation plus a rayon-parallel fold for multi-day periods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Menu nutrition aggregator
//!
//! Sums the per-serving macro totals of every dish line on a menu and
//! scores the result against an age band's recommended daily intake.
//! Period (weekly, monthly) aggregation is the same per-menu fold applied
//! across a date range; there is no separate weekly algorithm.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sprout_core::errors::{EngineError, EngineResult, Nutrient};
use sprout_core::models::{DailyTarget, Menu, NutritionFacts};
use uuid::Uuid;

/// Aggregated nutrition content of one or more menus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Summed macro content across all dish lines
    pub intake: NutritionFacts,
    /// Number of dish lines contributing to the sum
    pub dish_lines: usize,
}

/// Per-nutrient percentages of a daily target, rounded to whole percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetComparison {
    /// Calories as a percentage of the target
    pub calories_percent: u32,
    /// Protein as a percentage of the target
    pub protein_percent: u32,
    /// Fat as a percentage of the target
    pub fat_percent: u32,
    /// Carbohydrates as a percentage of the target
    pub carbs_percent: u32,
}

/// Stateless menu nutrition aggregator
///
/// Carries no configuration; exists so callers hold one engine object per
/// concern, mirroring the other components.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuNutritionAggregator;

impl MenuNutritionAggregator {
    /// Create an aggregator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sum the nutrition content of a menu's dish lines
    ///
    /// Each line contributes its dish's per-serving totals multiplied by
    /// the planned servings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyMenu`] when the menu has no dish lines.
    pub fn aggregate_menu(&self, menu: &Menu) -> EngineResult<NutritionTotals> {
        if menu.dishes.is_empty() {
            return Err(EngineError::empty_menu(menu.id));
        }

        let intake = menu
            .dishes
            .iter()
            .map(|line| line.dish.per_serving.scaled(line.servings))
            .fold(NutritionFacts::default(), |acc, facts| acc + facts);

        Ok(NutritionTotals {
            intake,
            dish_lines: menu.dishes.len(),
        })
    }

    /// Fold per-menu aggregation across a period of menus
    ///
    /// The menus are aggregated in parallel; any empty menu in the slice
    /// propagates its own failure. An empty slice is itself an empty menu
    /// (reported with a nil menu id, there being no menu to name).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyMenu`] for an empty slice or any menu
    /// without dish lines.
    pub fn aggregate_period(&self, menus: &[Menu]) -> EngineResult<NutritionTotals> {
        if menus.is_empty() {
            return Err(EngineError::empty_menu(Uuid::nil()));
        }

        let per_menu: Vec<NutritionTotals> = menus
            .par_iter()
            .map(|menu| self.aggregate_menu(menu))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(per_menu
            .into_iter()
            .fold(NutritionTotals::empty(), NutritionTotals::merge))
    }

    /// Score aggregated totals against a daily target
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingTarget`] naming the first nutrient
    /// whose target value is zero or negative, rather than dividing by it.
    pub fn compare_to_target(
        &self,
        totals: &NutritionTotals,
        target: &DailyTarget,
    ) -> EngineResult<TargetComparison> {
        Ok(TargetComparison {
            calories_percent: percentage(
                totals.intake.calories,
                target.intake.calories,
                Nutrient::Calories,
            )?,
            protein_percent: percentage(
                totals.intake.protein_g,
                target.intake.protein_g,
                Nutrient::Protein,
            )?,
            fat_percent: percentage(totals.intake.fat_g, target.intake.fat_g, Nutrient::Fat)?,
            carbs_percent: percentage(
                totals.intake.carbs_g,
                target.intake.carbs_g,
                Nutrient::Carbs,
            )?,
        })
    }
}

impl NutritionTotals {
    const fn empty() -> Self {
        Self {
            intake: NutritionFacts {
                calories: 0.0,
                protein_g: 0.0,
                fat_g: 0.0,
                carbs_g: 0.0,
            },
            dish_lines: 0,
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            intake: self.intake + other.intake,
            dish_lines: self.dish_lines + other.dish_lines,
        }
    }
}

fn percentage(total: f64, target: f64, nutrient: Nutrient) -> EngineResult<u32> {
    if target <= 0.0 {
        return Err(EngineError::missing_target(nutrient));
    }
    let percent = (total / target * 100.0).round();
    Ok(u32::try_from(percent.max(0.0) as i64).unwrap_or(u32::MAX))
}
