// ABOUTME: Allergen conflict detection between a child's allergies and menu ingredients
// ABOUTME: SubstringAllergenMatch policy: case-insensitive, substring-tolerant token matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sprout Childcare Intelligence

//! Allergy conflict checker
//!
//! Cross-references a child's recorded allergen tokens against the allergen
//! sets of every ingredient on a menu, expanded through each dish's recipe.
//! Never fails: a child with no recorded allergies short-circuits to a safe
//! report without inspecting the menu at all.

use serde::{Deserialize, Serialize};
use sprout_core::models::Menu;
use uuid::Uuid;

/// Policy seam for allergen token matching
///
/// The default policy is [`SubstringAllergenMatch`]; a stricter matcher
/// (canonical allergen taxonomy plus synonyms) can replace it without
/// changing the caller contract.
pub trait AllergenMatcher {
    /// Whether a child's recorded allergen conflicts with an ingredient's
    fn matches(&self, child_allergen: &str, ingredient_allergen: &str) -> bool;
}

/// Substring allergen matching policy
///
/// Two tokens conflict if, case-insensitively, either is a substring of the
/// other. This tolerates partial entries ("đậu phộng" vs "phộng") and
/// plural/compound forms ("peanut" vs "peanuts", "peanut butter"). It is a
/// known heuristic, not a medical-grade matcher, and it deliberately favors
/// false positives over false negatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringAllergenMatch;

impl AllergenMatcher for SubstringAllergenMatch {
    fn matches(&self, child_allergen: &str, ingredient_allergen: &str) -> bool {
        let child = child_allergen.trim().to_lowercase();
        let ingredient = ingredient_allergen.trim().to_lowercase();
        // An empty token would substring-match everything
        if child.is_empty() || ingredient.is_empty() {
            return false;
        }
        child.contains(&ingredient) || ingredient.contains(&child)
    }
}

/// A matched (child allergen, ingredient allergen) token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedAllergen {
    /// The child's recorded allergen, verbatim
    pub child_allergen: String,
    /// The ingredient's recorded allergen, verbatim
    pub ingredient_allergen: String,
}

/// One conflicting (dish, ingredient) pair on a checked menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergenConflict {
    /// Identifier of the dish containing the ingredient
    pub dish_id: Uuid,
    /// Name of the dish
    pub dish_name: String,
    /// Identifier of the conflicting ingredient
    pub ingredient_id: Uuid,
    /// Name of the ingredient
    pub ingredient_name: String,
    /// Every allergen token pair that matched
    pub matched_allergens: Vec<MatchedAllergen>,
}

/// Result of checking one child against one menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Whether the menu is safe for the child
    pub safe: bool,
    /// Every conflicting (dish, ingredient) pair found
    pub conflicts: Vec<AllergenConflict>,
    /// Number of distinct dishes with at least one conflict
    pub dishes_in_conflict: usize,
}

impl ConflictReport {
    const fn safe() -> Self {
        Self {
            safe: true,
            conflicts: Vec::new(),
            dishes_in_conflict: 0,
        }
    }
}

/// Allergy conflict checker with a pluggable matching policy
pub struct AllergyConflictChecker<M: AllergenMatcher = SubstringAllergenMatch> {
    matcher: M,
}

impl Default for AllergyConflictChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl AllergyConflictChecker {
    /// Create a checker with the substring matching policy
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matcher: SubstringAllergenMatch,
        }
    }
}

impl<M: AllergenMatcher> AllergyConflictChecker<M> {
    /// Create a checker with a custom matching policy
    #[must_use]
    pub const fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Check a child's allergen set against every ingredient on a menu
    ///
    /// The menu's dish lines are expanded through their recipes; every
    /// (dish, ingredient) pair with at least one matching allergen token is
    /// reported. A child with no recorded allergies short-circuits to a
    /// safe report without inspecting the menu.
    #[must_use]
    pub fn check_menu(&self, child_allergies: &[String], menu: &Menu) -> ConflictReport {
        if child_allergies.is_empty() {
            return ConflictReport::safe();
        }

        let mut conflicts = Vec::new();
        let mut dishes_in_conflict = 0usize;

        for line in &menu.dishes {
            let mut dish_hit = false;
            for ingredient_line in &line.dish.ingredients {
                let ingredient = &ingredient_line.ingredient;
                let matched: Vec<MatchedAllergen> = child_allergies
                    .iter()
                    .flat_map(|child_allergen| {
                        ingredient.allergens.iter().filter_map(|ingredient_allergen| {
                            self.matcher
                                .matches(child_allergen, ingredient_allergen)
                                .then(|| MatchedAllergen {
                                    child_allergen: child_allergen.clone(),
                                    ingredient_allergen: ingredient_allergen.clone(),
                                })
                        })
                    })
                    .collect();

                if !matched.is_empty() {
                    dish_hit = true;
                    conflicts.push(AllergenConflict {
                        dish_id: line.dish.id,
                        dish_name: line.dish.name.clone(),
                        ingredient_id: ingredient.id,
                        ingredient_name: ingredient.name.clone(),
                        matched_allergens: matched,
                    });
                }
            }
            if dish_hit {
                dishes_in_conflict += 1;
            }
        }

        if !conflicts.is_empty() {
            tracing::warn!(
                menu_id = %menu.id,
                conflicts = conflicts.len(),
                "allergen conflicts detected on planned menu"
            );
        }

        ConflictReport {
            safe: conflicts.is_empty(),
            conflicts,
            dishes_in_conflict,
        }
    }
}
