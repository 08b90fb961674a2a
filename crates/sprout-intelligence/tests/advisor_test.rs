// ABOUTME: Integration tests for the intervention advisor decision table
// ABOUTME: Covers monitoring cadence, poor-appetite override, and avoidance lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use sprout_core::models::{ActivityLevel, Appetite, NutritionStatus};
use sprout_intelligence::growth_trend::TrendVerdict;
use sprout_intelligence::{InterventionAdvisor, MonitoringFrequency};

fn advisor() -> InterventionAdvisor {
    InterventionAdvisor::new()
}

fn plan_for(status: NutritionStatus) -> sprout_intelligence::InterventionPlan {
    advisor().advise(
        status,
        TrendVerdict::Normal,
        Appetite::Good,
        ActivityLevel::Moderate,
        &[],
    )
}

#[test]
fn monitoring_cadence_follows_severity_table() {
    assert_eq!(
        plan_for(NutritionStatus::Obese).monitoring,
        MonitoringFrequency::Weekly
    );
    assert_eq!(
        plan_for(NutritionStatus::SevereMalnutrition).monitoring,
        MonitoringFrequency::Weekly
    );
    assert_eq!(
        plan_for(NutritionStatus::Malnutrition).monitoring,
        MonitoringFrequency::BiWeekly
    );
    assert_eq!(
        plan_for(NutritionStatus::Overweight).monitoring,
        MonitoringFrequency::BiWeekly
    );
    assert_eq!(
        plan_for(NutritionStatus::Normal).monitoring,
        MonitoringFrequency::Monthly
    );
    assert_eq!(
        plan_for(NutritionStatus::NeedsIndividualAssessment).monitoring,
        MonitoringFrequency::Monthly
    );
}

#[test]
fn poor_appetite_appends_feeding_suggestions_regardless_of_category() {
    for status in [
        NutritionStatus::SevereMalnutrition,
        NutritionStatus::Normal,
        NutritionStatus::Obese,
    ] {
        let plan = advisor().advise(
            status,
            TrendVerdict::Normal,
            Appetite::Poor,
            ActivityLevel::Moderate,
            &[],
        );
        assert!(
            !plan.feeding_behavior.is_empty(),
            "expected feeding suggestions for {status:?}"
        );
    }

    let plan = plan_for(NutritionStatus::Normal);
    assert!(plan.feeding_behavior.is_empty());
}

#[test]
fn allergies_produce_an_avoidance_list_verbatim() {
    let plan = advisor().advise(
        NutritionStatus::Normal,
        TrendVerdict::Normal,
        Appetite::Good,
        ActivityLevel::Moderate,
        &["đậu phộng".to_owned(), "Dairy".to_owned()],
    );
    assert!(plan.avoid.iter().any(|line| line == "đậu phộng"));
    assert!(plan.avoid.iter().any(|line| line == "Dairy"));

    let plan = plan_for(NutritionStatus::Normal);
    assert!(plan.avoid.is_empty());
}

#[test]
fn underweight_goals_point_up_and_overweight_goals_do_not() {
    assert!(
        plan_for(NutritionStatus::SevereMalnutrition)
            .goal
            .target_monthly_weight_delta_kg
            > 0.0
    );
    assert!(
        plan_for(NutritionStatus::Malnutrition)
            .goal
            .target_monthly_weight_delta_kg
            > 0.0
    );
    assert!(
        plan_for(NutritionStatus::Overweight)
            .goal
            .target_monthly_weight_delta_kg
            .abs()
            < f64::EPSILON
    );
    assert!(plan_for(NutritionStatus::Obese).goal.target_monthly_weight_delta_kg < 0.0);
}

#[test]
fn concerning_trend_appends_a_dietary_note() {
    let baseline = plan_for(NutritionStatus::Normal).dietary.len();

    let attention = advisor().advise(
        NutritionStatus::Normal,
        TrendVerdict::NeedsAttention,
        Appetite::Good,
        ActivityLevel::Moderate,
        &[],
    );
    assert_eq!(attention.dietary.len(), baseline + 1);

    let rapid = advisor().advise(
        NutritionStatus::Normal,
        TrendVerdict::RapidWeightGain,
        Appetite::Good,
        ActivityLevel::Moderate,
        &[],
    );
    assert_eq!(rapid.dietary.len(), baseline + 1);
}

#[test]
fn low_activity_adds_a_movement_suggestion() {
    let baseline = plan_for(NutritionStatus::Normal).activity.len();
    let plan = advisor().advise(
        NutritionStatus::Normal,
        TrendVerdict::Normal,
        Appetite::Good,
        ActivityLevel::Low,
        &[],
    );
    assert_eq!(plan.activity.len(), baseline + 1);
}

#[test]
fn monitoring_frequency_derives_next_due_date() {
    let assessed = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    assert_eq!(
        MonitoringFrequency::Weekly.next_due_from(assessed),
        NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
    );
    assert_eq!(
        MonitoringFrequency::BiWeekly.next_due_from(assessed),
        NaiveDate::from_ymd_opt(2025, 3, 24).unwrap()
    );
    assert_eq!(
        MonitoringFrequency::Monthly.next_due_from(assessed),
        NaiveDate::from_ymd_opt(2025, 4, 9).unwrap()
    );
}

#[test]
fn bi_weekly_serializes_with_hyphen() {
    let json = serde_json::to_string(&MonitoringFrequency::BiWeekly).unwrap();
    assert_eq!(json, "\"bi-weekly\"");
}

#[test]
fn identical_inputs_yield_identical_plans() {
    let allergies = vec!["egg".to_owned()];
    let first = advisor().advise(
        NutritionStatus::Overweight,
        TrendVerdict::RapidWeightGain,
        Appetite::Poor,
        ActivityLevel::Low,
        &allergies,
    );
    let second = advisor().advise(
        NutritionStatus::Overweight,
        TrendVerdict::RapidWeightGain,
        Appetite::Poor,
        ActivityLevel::Low,
        &allergies,
    );
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
