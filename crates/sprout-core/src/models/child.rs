// ABOUTME: Child enrollment record with allergies and medical conditions
// ABOUTME: Read-only input to the analytics engine, owned by the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender recorded at enrollment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Enrolled child record
///
/// Allergen names in `allergies` are stored verbatim as entered by
/// caregivers (free text, any language); matching against ingredient
/// allergens is case-insensitive and substring-tolerant at check time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Child {
    /// Unique identifier
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Class/group assignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Uuid>,
    /// Known food allergen names, verbatim free text
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Recorded medical conditions
    #[serde(default)]
    pub medical_conditions: Vec<String>,
}

impl Child {
    /// Age in whole months on the given date
    ///
    /// Returns `None` when `on` precedes the date of birth.
    #[must_use]
    pub fn age_months_on(&self, on: NaiveDate) -> Option<u32> {
        if on < self.date_of_birth {
            return None;
        }
        let years = on.year() - self.date_of_birth.year();
        let months = on.month0() as i32 - self.date_of_birth.month0() as i32;
        let mut total = years * 12 + months;
        if on.day() < self.date_of_birth.day() {
            total -= 1;
        }
        u32::try_from(total).ok()
    }

    /// Whether the child has any recorded food allergy
    #[must_use]
    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }
}
