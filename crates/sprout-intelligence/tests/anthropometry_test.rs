// ABOUTME: Integration tests for BMI computation, band classification, and validation
// ABOUTME: Covers band boundaries, plausibility bounds, and the same-day write decision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use sprout_core::errors::EngineError;
use sprout_core::models::{
    ActivityLevel, Appetite, Assessment, Mood, NutritionStatus,
};
use sprout_intelligence::anthropometry::{
    compute_bmi, resolve_assessment_write, AssessmentWrite, MeasurementInput,
};
use sprout_intelligence::AnthropometricClassifier;
use uuid::Uuid;

fn classifier() -> AnthropometricClassifier {
    AnthropometricClassifier::new()
}

fn measurement(height_cm: f64, weight_kg: f64, age_months: u32) -> MeasurementInput {
    MeasurementInput {
        height_cm,
        weight_kg,
        age_months: Some(age_months),
    }
}

fn stored_assessment(child_id: Uuid, date: NaiveDate) -> Assessment {
    Assessment {
        id: Uuid::new_v4(),
        child_id,
        date,
        height_cm: 100.0,
        weight_kg: 16.0,
        bmi: 16.0,
        status: NutritionStatus::Normal,
        appetite: Appetite::Good,
        activity_level: ActivityLevel::Moderate,
        mood: Mood::Happy,
        notes: None,
        next_due: None,
    }
}

// === BMI computation ===

#[test]
fn bmi_matches_formula_rounded_to_one_decimal() {
    // 18.5 kg at 100 cm -> 18.5 / 1.0 = 18.5
    assert!((compute_bmi(18.5, 100.0).unwrap() - 18.5).abs() < f64::EPSILON);
    // 20 kg at 110 cm -> 20 / 1.21 = 16.528... -> 16.5
    assert!((compute_bmi(20.0, 110.0).unwrap() - 16.5).abs() < f64::EPSILON);
}

#[test]
fn non_positive_inputs_fail_invalid_measurement() {
    let err = compute_bmi(-1.0, 100.0).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidMeasurement { field: "weight_kg", .. }
    ));

    let err = compute_bmi(15.0, 0.0).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidMeasurement { field: "height_cm", .. }
    ));
}

// === Band classification ===

#[test]
fn bmi_fourteen_is_malnutrition_boundary() {
    let result = classifier()
        .classify_assessment(measurement(100.0, 14.0, 36))
        .unwrap();
    assert!((result.bmi - 14.0).abs() < f64::EPSILON);
    assert_eq!(result.status, NutritionStatus::Malnutrition);
}

#[test]
fn bmi_eighteen_point_five_is_inclusive_normal_boundary() {
    let result = classifier()
        .classify_assessment(measurement(100.0, 18.5, 36))
        .unwrap();
    assert!((result.bmi - 18.5).abs() < f64::EPSILON);
    assert_eq!(result.status, NutritionStatus::Normal);
}

#[test]
fn all_five_bands_reachable() {
    let c = classifier();
    assert_eq!(
        c.classify(13.9, Some(36)),
        NutritionStatus::SevereMalnutrition
    );
    assert_eq!(c.classify(15.0, Some(36)), NutritionStatus::Malnutrition);
    assert_eq!(c.classify(17.0, Some(36)), NutritionStatus::Normal);
    assert_eq!(c.classify(23.0, Some(36)), NutritionStatus::Overweight);
    assert_eq!(c.classify(23.1, Some(36)), NutritionStatus::Obese);
}

#[test]
fn under_two_years_needs_individual_assessment() {
    let c = classifier();
    assert_eq!(
        c.classify(17.0, Some(23)),
        NutritionStatus::NeedsIndividualAssessment
    );
    // 24 months is classifiable
    assert_eq!(c.classify(17.0, Some(24)), NutritionStatus::Normal);
    // unknown age classifies against the bands
    assert_eq!(c.classify(17.0, None), NutritionStatus::Normal);
}

#[test]
fn in_range_sweep_always_yields_a_band_category() {
    let c = classifier();
    for height in [50.0_f64, 75.0, 100.0, 130.0, 160.0, 200.0] {
        for weight in [5.0_f64, 12.0, 20.0, 45.0, 70.0, 100.0] {
            let result = c
                .classify_assessment(measurement(height, weight, 48))
                .unwrap();

            let height_m = height / 100.0;
            let expected_bmi = (weight / (height_m * height_m) * 10.0).round() / 10.0;
            assert!((result.bmi - expected_bmi).abs() < f64::EPSILON);

            assert!(matches!(
                result.status,
                NutritionStatus::SevereMalnutrition
                    | NutritionStatus::Malnutrition
                    | NutritionStatus::Normal
                    | NutritionStatus::Overweight
                    | NutritionStatus::Obese
            ));
        }
    }
}

#[test]
fn classification_is_idempotent() {
    let c = classifier();
    let input = measurement(105.0, 17.2, 40);
    let first = c.classify_assessment(input).unwrap();
    let second = c.classify_assessment(input).unwrap();
    assert_eq!(first, second);
}

// === Plausibility validation ===

#[test]
fn out_of_range_height_names_field_and_bounds() {
    let err = classifier()
        .classify_assessment(measurement(210.0, 20.0, 36))
        .unwrap_err();
    match err {
        EngineError::OutOfRangeMeasurement {
            field, min, max, value,
        } => {
            assert_eq!(field, "height_cm");
            assert!((min - 50.0).abs() < f64::EPSILON);
            assert!((max - 200.0).abs() < f64::EPSILON);
            assert!((value - 210.0).abs() < f64::EPSILON);
        }
        other => panic!("expected OutOfRangeMeasurement, got {other:?}"),
    }
}

#[test]
fn out_of_range_weight_names_field_and_bounds() {
    let err = classifier()
        .classify_assessment(measurement(100.0, 4.9, 36))
        .unwrap_err();
    match err {
        EngineError::OutOfRangeMeasurement { field, min, max, .. } => {
            assert_eq!(field, "weight_kg");
            assert!((min - 5.0).abs() < f64::EPSILON);
            assert!((max - 100.0).abs() < f64::EPSILON);
        }
        other => panic!("expected OutOfRangeMeasurement, got {other:?}"),
    }
}

// === Same-day write decision ===

#[test]
fn same_child_same_date_updates_in_place() {
    let child_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let existing = stored_assessment(child_id, date);

    let decision = resolve_assessment_write(Some(&existing), child_id, date);
    assert_eq!(decision, AssessmentWrite::Update { id: existing.id });
}

#[test]
fn missing_or_mismatched_record_inserts() {
    let child_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    assert_eq!(
        resolve_assessment_write(None, child_id, date),
        AssessmentWrite::Insert
    );

    // record from another day
    let other_day = stored_assessment(child_id, date.pred_opt().unwrap());
    assert_eq!(
        resolve_assessment_write(Some(&other_day), child_id, date),
        AssessmentWrite::Insert
    );

    // record from another child
    let other_child = stored_assessment(Uuid::new_v4(), date);
    assert_eq!(
        resolve_assessment_write(Some(&other_child), child_id, date),
        AssessmentWrite::Insert
    );
}
