// ABOUTME: Integration tests for menu nutrition aggregation and target comparison
// ABOUTME: Covers dish-line summation, empty menus, period folds, and missing targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use sprout_core::errors::{EngineError, Nutrient};
use sprout_core::models::{
    AgeBand, DailyTarget, Dish, DishCategory, DishLine, MealSession, Menu, NutritionFacts,
};
use sprout_intelligence::MenuNutritionAggregator;
use uuid::Uuid;

fn dish(name: &str, per_serving: NutritionFacts) -> Dish {
    Dish {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        category: DishCategory::Main,
        per_serving,
        ingredients: vec![],
    }
}

fn facts(calories: f64, protein_g: f64, fat_g: f64, carbs_g: f64) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    }
}

fn menu(lines: Vec<DishLine>) -> Menu {
    Menu {
        id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        session: MealSession::Lunch,
        class_id: None,
        headcount: 25,
        dishes: lines,
    }
}

#[test]
fn dish_lines_sum_scaled_by_servings() {
    let aggregator = MenuNutritionAggregator::new();
    let lunch = menu(vec![
        DishLine {
            dish: dish("chicken rice", facts(300.0, 12.0, 8.0, 40.0)),
            servings: 2.0,
        },
        DishLine {
            dish: dish("pumpkin soup", facts(150.0, 4.0, 5.0, 18.0)),
            servings: 1.0,
        },
    ]);

    let totals = aggregator.aggregate_menu(&lunch).unwrap();
    assert!((totals.intake.calories - 750.0).abs() < f64::EPSILON);
    assert!((totals.intake.protein_g - 28.0).abs() < f64::EPSILON);
    assert!((totals.intake.fat_g - 21.0).abs() < f64::EPSILON);
    assert!((totals.intake.carbs_g - 98.0).abs() < f64::EPSILON);
    assert_eq!(totals.dish_lines, 2);
}

#[test]
fn zero_dish_lines_fails_empty_menu() {
    let aggregator = MenuNutritionAggregator::new();
    let empty = menu(vec![]);

    let err = aggregator.aggregate_menu(&empty).unwrap_err();
    match err {
        EngineError::EmptyMenu { menu_id } => assert_eq!(menu_id, empty.id),
        other => panic!("expected EmptyMenu, got {other:?}"),
    }
}

#[test]
fn aggregation_is_idempotent() {
    let aggregator = MenuNutritionAggregator::new();
    let lunch = menu(vec![DishLine {
        dish: dish("noodles", facts(280.0, 9.0, 7.0, 45.0)),
        servings: 1.5,
    }]);

    let first = aggregator.aggregate_menu(&lunch).unwrap();
    let second = aggregator.aggregate_menu(&lunch).unwrap();
    assert_eq!(first, second);
}

#[test]
fn period_fold_equals_sum_of_per_menu_folds() {
    let aggregator = MenuNutritionAggregator::new();
    let monday = menu(vec![DishLine {
        dish: dish("porridge", facts(200.0, 6.0, 4.0, 35.0)),
        servings: 1.0,
    }]);
    let tuesday = menu(vec![DishLine {
        dish: dish("fried rice", facts(320.0, 10.0, 9.0, 50.0)),
        servings: 2.0,
    }]);

    let week = aggregator
        .aggregate_period(&[monday.clone(), tuesday.clone()])
        .unwrap();
    let mon = aggregator.aggregate_menu(&monday).unwrap();
    let tue = aggregator.aggregate_menu(&tuesday).unwrap();

    assert!((week.intake.calories - (mon.intake.calories + tue.intake.calories)).abs()
        < f64::EPSILON);
    assert_eq!(week.dish_lines, mon.dish_lines + tue.dish_lines);
}

#[test]
fn period_with_an_empty_menu_propagates_its_failure() {
    let aggregator = MenuNutritionAggregator::new();
    let good = menu(vec![DishLine {
        dish: dish("soup", facts(100.0, 3.0, 2.0, 12.0)),
        servings: 1.0,
    }]);
    let bad = menu(vec![]);

    let err = aggregator.aggregate_period(&[good, bad.clone()]).unwrap_err();
    match err {
        EngineError::EmptyMenu { menu_id } => assert_eq!(menu_id, bad.id),
        other => panic!("expected EmptyMenu, got {other:?}"),
    }
}

#[test]
fn empty_period_slice_is_rejected() {
    let aggregator = MenuNutritionAggregator::new();
    assert!(matches!(
        aggregator.aggregate_period(&[]),
        Err(EngineError::EmptyMenu { .. })
    ));
}

#[test]
fn target_comparison_reports_rounded_percentages() {
    let aggregator = MenuNutritionAggregator::new();
    let lunch = menu(vec![DishLine {
        dish: dish("set lunch", facts(650.0, 13.0, 20.0, 83.0)),
        servings: 1.0,
    }]);
    let totals = aggregator.aggregate_menu(&lunch).unwrap();
    let target = DailyTarget::for_band(AgeBand::Preschool);

    let comparison = aggregator.compare_to_target(&totals, &target).unwrap();
    // 650 / 1300 = 50%, 13 / 25 = 52%, 20 / 40 = 50%, 83 / 160 = 51.875 -> 52%
    assert_eq!(comparison.calories_percent, 50);
    assert_eq!(comparison.protein_percent, 52);
    assert_eq!(comparison.fat_percent, 50);
    assert_eq!(comparison.carbs_percent, 52);
}

#[test]
fn zero_target_value_fails_missing_target_instead_of_dividing() {
    let aggregator = MenuNutritionAggregator::new();
    let lunch = menu(vec![DishLine {
        dish: dish("snack", facts(120.0, 2.0, 3.0, 20.0)),
        servings: 1.0,
    }]);
    let totals = aggregator.aggregate_menu(&lunch).unwrap();

    let mut target = DailyTarget::for_band(AgeBand::Toddler);
    target.intake.protein_g = 0.0;

    let err = aggregator.compare_to_target(&totals, &target).unwrap_err();
    match err {
        EngineError::MissingTarget { nutrient } => assert_eq!(nutrient, Nutrient::Protein),
        other => panic!("expected MissingTarget, got {other:?}"),
    }
}
