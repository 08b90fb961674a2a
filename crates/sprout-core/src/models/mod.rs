// ABOUTME: Core data models for the Sprout childcare nutrition platform
// ABOUTME: Re-exports Child, Assessment, Menu, Dish, Ingredient and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! # Data Models
//!
//! Plain domain records consumed by the analytics engine. The persistence
//! layer owns these rows; the engine treats them as read-only input, with
//! one exception: derived fields on `Assessment` (BMI, nutrition status)
//! are always recomputed by the engine, never trusted from caller input.
//!
//! ## Core Models
//!
//! - `Child`: enrollment record with allergies and medical conditions
//! - `Assessment`: one dated height/weight measurement with derived status
//! - `Dish` / `Ingredient`: per-serving and per-100g nutrition facts
//! - `Menu`: a dated meal plan of (dish, servings) lines for a class
//! - `DailyTarget`: age-band recommended daily intake (reference data)

mod assessment;
mod child;
mod menu;

pub use assessment::{ActivityLevel, Appetite, Assessment, Mood, NutritionStatus};
pub use child::{Child, Gender};
pub use menu::{
    AgeBand, DailyTarget, Dish, DishCategory, DishLine, Ingredient, IngredientLine, MealSession,
    Menu, NutritionFacts,
};
