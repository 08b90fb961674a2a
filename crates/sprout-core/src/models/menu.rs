// ABOUTME: Menu planning models: dishes, ingredients, menus, and daily intake targets
// ABOUTME: NutritionFacts is the shared macro profile for per-serving and per-100g totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

use crate::constants::growth::daily_intake;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Macro-nutrient profile (kcal and grams)
///
/// Used both as a dish's per-serving totals and an ingredient's per-100g
/// profile; context decides the basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

impl NutritionFacts {
    /// Scale every nutrient by a factor (servings, portion ratio)
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
        }
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
        }
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Dish category on a childcare menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    /// Main dish
    Main,
    /// Soup
    Soup,
    /// Dessert
    Dessert,
    /// Drink
    Drink,
    /// Snack
    Snack,
}

/// Kitchen ingredient with per-100g profile and recorded allergens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier
    pub id: Uuid,
    /// Ingredient name
    pub name: String,
    /// Macro profile per 100g
    pub per_100g: NutritionFacts,
    /// Allergen names recorded for this ingredient, verbatim free text
    #[serde(default)]
    pub allergens: Vec<String>,
}

/// An (ingredient, quantity) line within a dish recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientLine {
    /// The ingredient used
    pub ingredient: Ingredient,
    /// Quantity in grams per serving
    pub quantity_g: f64,
}

/// A prepared dish with per-serving totals and its recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Unique identifier
    pub id: Uuid,
    /// Dish name
    pub name: String,
    /// Menu category
    pub category: DishCategory,
    /// Nutrition totals per serving
    pub per_serving: NutritionFacts,
    /// Recipe lines
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

/// Meal session a menu applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSession {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
}

impl MealSession {
    /// Parse meal session from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Lunch,
        }
    }
}

/// A (dish, servings) line on a planned menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishLine {
    /// The planned dish, with resolved per-serving totals
    pub dish: Dish,
    /// Number of servings planned per child
    pub servings: f64,
}

/// A planned menu for one class and meal session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Unique identifier
    pub id: Uuid,
    /// Date the menu applies to
    pub date: NaiveDate,
    /// Meal session tag
    pub session: MealSession,
    /// Class the menu is planned for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Uuid>,
    /// Expected number of children served
    pub headcount: u32,
    /// Planned dish lines
    #[serde(default)]
    pub dishes: Vec<DishLine>,
}

/// Coarse age grouping used to select a daily intake target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// 12-23 months
    Toddler,
    /// 24-47 months
    Preschool,
    /// 48 months and up
    Kindergarten,
}

impl AgeBand {
    /// Select the age band for an age in months
    #[must_use]
    pub const fn from_age_months(age_months: u32) -> Self {
        if age_months >= daily_intake::KINDERGARTEN_MIN_MONTHS {
            Self::Kindergarten
        } else if age_months >= daily_intake::PRESCHOOL_MIN_MONTHS {
            Self::Preschool
        } else {
            Self::Toddler
        }
    }
}

/// Recommended daily intake for an age band
///
/// Static reference data (see `constants::growth::daily_intake`), not
/// persisted per child. Zero values are treated as absent targets by the
/// comparison path and rejected there rather than divided by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTarget {
    /// Age band this target applies to
    pub band: AgeBand,
    /// Recommended daily intake
    pub intake: NutritionFacts,
}

impl DailyTarget {
    /// Default reference target for an age band
    #[must_use]
    pub const fn for_band(band: AgeBand) -> Self {
        let (calories, protein_g, fat_g, carbs_g) = match band {
            AgeBand::Toddler => daily_intake::TODDLER,
            AgeBand::Preschool => daily_intake::PRESCHOOL,
            AgeBand::Kindergarten => daily_intake::KINDERGARTEN,
        };
        Self {
            band,
            intake: NutritionFacts {
                calories,
                protein_g,
                fat_g,
                carbs_g,
            },
        }
    }

    /// Default reference target for an age in months
    #[must_use]
    pub const fn for_age_months(age_months: u32) -> Self {
        Self::for_band(AgeBand::from_age_months(age_months))
    }
}
