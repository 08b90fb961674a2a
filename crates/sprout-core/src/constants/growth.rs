// ABOUTME: Growth and nutrition reference constants for early-childhood assessment
// ABOUTME: BMI band cut points, plausible measurement bounds, and daily intake reference table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Growth reference constants for early-childhood nutrition assessment.
//!
//! These values seed the engine configuration defaults in
//! `sprout-intelligence`; analysis code reads them through its config layer
//! so recalibration never touches call sites.

/// BMI band cut points for children 24 months and older
///
/// Simplified from the WHO child BMI-for-age reference into fixed bands.
/// Not a substitute for age/sex-specific z-score charts; children under
/// [`age::BMI_CLASSIFICATION_MIN_MONTHS`] are routed to individual
/// assessment instead of these bands.
///
/// Reference: WHO Child Growth Standards, BMI-for-age.
/// <https://www.who.int/tools/child-growth-standards/standards/body-mass-index-for-age-bmi-for-age>
pub mod bmi_bands {
    /// Below this BMI a child is classified as severely malnourished
    pub const SEVERE_MALNUTRITION_MAX: f64 = 14.0;

    /// Upper bound (exclusive) of the malnutrition band
    pub const MALNUTRITION_MAX: f64 = 16.0;

    /// Upper bound (inclusive) of the normal band
    pub const NORMAL_MAX: f64 = 18.5;

    /// Upper bound (inclusive) of the overweight band; above is obese
    pub const OVERWEIGHT_MAX: f64 = 23.0;
}

/// Age cutoffs for assessment routing
pub mod age {
    /// Minimum age for fixed-band BMI classification
    ///
    /// Below 24 months, BMI bands are not meaningful without age-specific
    /// growth charts; those children need individual assessment.
    pub const BMI_CLASSIFICATION_MIN_MONTHS: u32 = 24;
}

/// Clinically plausible measurement bounds for the assessment-creation path
///
/// Values outside these ranges are rejected as data-entry errors rather
/// than classified: a 3 cm or 300 kg reading is a typo, not a finding.
pub mod measurement_bounds {
    /// Minimum plausible standing height for an enrolled child (cm)
    pub const HEIGHT_MIN_CM: f64 = 50.0;

    /// Maximum plausible standing height for an enrolled child (cm)
    pub const HEIGHT_MAX_CM: f64 = 200.0;

    /// Minimum plausible weight for an enrolled child (kg)
    pub const WEIGHT_MIN_KG: f64 = 5.0;

    /// Maximum plausible weight for an enrolled child (kg)
    pub const WEIGHT_MAX_KG: f64 = 100.0;
}

/// Growth-trend thresholds between two assessments
pub mod trend {
    /// BMI drift tolerated while still calling growth "good" (absolute)
    pub const BMI_STABILITY_TOLERANCE: f64 = 0.5;

    /// BMI increase between assessments flagged as rapid weight gain
    pub const RAPID_BMI_GAIN: f64 = 1.0;

    /// BMI decrease between assessments flagged as rapid weight loss
    pub const RAPID_BMI_LOSS: f64 = -1.0;

    /// Days counted as one month when converting elapsed time
    pub const DAYS_PER_MONTH: i64 = 30;
}

/// Recommended daily intake by age band
///
/// Coarse childcare reference table (energy in kcal, macros in grams),
/// sized from common daycare intake guidance for full-day attendance.
/// Carried as constants so menus can be scored without per-child targets.
pub mod daily_intake {
    /// Toddler band (12-23 months): calories, protein, fat, carbs
    pub const TODDLER: (f64, f64, f64, f64) = (1000.0, 20.0, 35.0, 130.0);

    /// Preschool band (24-47 months): calories, protein, fat, carbs
    pub const PRESCHOOL: (f64, f64, f64, f64) = (1300.0, 25.0, 40.0, 160.0);

    /// Kindergarten band (48+ months): calories, protein, fat, carbs
    pub const KINDERGARTEN: (f64, f64, f64, f64) = (1600.0, 30.0, 50.0, 200.0);

    /// First month of the preschool band
    pub const PRESCHOOL_MIN_MONTHS: u32 = 24;

    /// First month of the kindergarten band
    pub const KINDERGARTEN_MIN_MONTHS: u32 = 48;
}

/// Monitoring cadence intervals in days, keyed by nutrition-status severity
pub mod monitoring {
    /// Re-assessment interval for weekly monitoring
    pub const WEEKLY_INTERVAL_DAYS: i64 = 7;

    /// Re-assessment interval for bi-weekly monitoring
    pub const BIWEEKLY_INTERVAL_DAYS: i64 = 14;

    /// Re-assessment interval for monthly monitoring
    pub const MONTHLY_INTERVAL_DAYS: i64 = 30;
}
