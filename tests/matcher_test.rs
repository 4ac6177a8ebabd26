// ABOUTME: Integration tests for the recipe matcher
// ABOUTME: Covers the concrete matching scenarios and the matcher's invariants
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Tests for the matcher including:
//! - Superset and time-window qualification
//! - First-match-wins in dataset order
//! - Margin monotonicity and purity

use culinaire::matcher::{find_matching_recipe, find_matching_recipe_default_margin};
use culinaire::models::Recipe;

fn taco_catalog() -> Vec<Recipe> {
    vec![Recipe::new("Taco", 20)
        .with_ingredients(vec!["Kjøttdeig".to_owned(), "Ris".to_owned()])
        .with_description(vec!["Stek".to_owned(), "Server".to_owned()])]
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_selected_ingredient_within_window_matches() {
    let catalog = taco_catalog();
    let matched = find_matching_recipe(&catalog, &labels(&["Kjøttdeig"]), 20, 5);

    assert_eq!(
        matched.map(|r| r.name.as_str()),
        Some("Taco"),
        "Kjøttdeig at 20 min should match the Taco recipe"
    );
}

#[test]
fn test_unknown_ingredient_matches_nothing() {
    let catalog = taco_catalog();
    let matched = find_matching_recipe(&catalog, &labels(&["Tofu"]), 20, 5);

    assert!(matched.is_none(), "Tofu is not in the Taco ingredients");
}

#[test]
fn test_time_outside_window_matches_nothing() {
    let catalog = taco_catalog();

    // Window is [25, 35]; the Taco takes 20 minutes.
    let matched = find_matching_recipe(&catalog, &labels(&["Kjøttdeig"]), 30, 5);
    assert!(matched.is_none(), "20 is outside [25, 35]");
}

#[test]
fn test_empty_catalog_matches_nothing() {
    let matched = find_matching_recipe(&[], &labels(&["Kjøttdeig"]), 20, 5);
    assert!(matched.is_none());

    let matched = find_matching_recipe(&[], &[], 20, 5);
    assert!(matched.is_none());
}

// ============================================================================
// Window Boundaries
// ============================================================================

#[test]
fn test_window_bounds_are_inclusive() {
    let catalog = taco_catalog();
    let selected = labels(&["Kjøttdeig"]);

    // Taco time 20 sits exactly on the bound in both directions.
    assert!(find_matching_recipe(&catalog, &selected, 15, 5).is_some());
    assert!(find_matching_recipe(&catalog, &selected, 25, 5).is_some());
    assert!(find_matching_recipe(&catalog, &selected, 14, 5).is_none());
    assert!(find_matching_recipe(&catalog, &selected, 26, 5).is_none());
}

#[test]
fn test_negative_lower_bound_used_literally() {
    let quick = vec![Recipe::new("Kokt egg", 0).with_ingredients(vec!["Egg".to_owned()])];

    // target 2, margin 5 gives window [-3, 7]; a zero-minute recipe qualifies.
    assert!(find_matching_recipe(&quick, &labels(&["Egg"]), 2, 5).is_some());

    // Margin larger than the target must not be clamped either.
    assert!(find_matching_recipe(&quick, &labels(&["Egg"]), 3, 10).is_some());
}

#[test]
fn test_zero_margin_requires_exact_time() {
    let catalog = taco_catalog();
    let selected = labels(&["Kjøttdeig"]);

    assert!(find_matching_recipe(&catalog, &selected, 20, 0).is_some());
    assert!(find_matching_recipe(&catalog, &selected, 21, 0).is_none());
}

// ============================================================================
// Invariants
// ============================================================================

#[test]
fn test_empty_selection_returns_first_time_qualifying_entry() {
    let catalog = vec![
        Recipe::new("Langsom", 40),
        Recipe::new("Midt", 20),
        Recipe::new("Rask", 18),
    ];

    let matched = find_matching_recipe(&catalog, &[], 20, 5);
    assert_eq!(
        matched.map(|r| r.name.as_str()),
        Some("Midt"),
        "First entry whose time qualifies wins"
    );
}

#[test]
fn test_result_always_contains_every_selected_label() {
    let catalog = vec![
        Recipe::new("Bare egg", 20).with_ingredients(vec!["Egg".to_owned()]),
        Recipe::new("Egg og ris", 20)
            .with_ingredients(vec!["Egg".to_owned(), "Ris".to_owned()]),
    ];
    let selected = labels(&["Egg", "Ris"]);

    let matched = find_matching_recipe(&catalog, &selected, 20, 5).unwrap();
    for label in &selected {
        assert!(
            matched.ingredients.contains(label),
            "Matched recipe must contain {label}"
        );
    }
    assert_eq!(matched.name, "Egg og ris");
}

#[test]
fn test_widening_margin_never_loses_a_hit() {
    let catalog = taco_catalog();
    let selected = labels(&["Kjøttdeig"]);

    for target in 0..=30 {
        for margin in 0..=10 {
            if find_matching_recipe(&catalog, &selected, target, margin).is_some() {
                assert!(
                    find_matching_recipe(&catalog, &selected, target, margin + 1).is_some(),
                    "Widening the margin from {margin} lost a hit at target {target}"
                );
            }
        }
    }
}

#[test]
fn test_matching_is_idempotent() {
    let catalog = taco_catalog();
    let selected = labels(&["Kjøttdeig"]);

    let first = find_matching_recipe(&catalog, &selected, 20, 5);
    let second = find_matching_recipe(&catalog, &selected, 20, 5);

    assert_eq!(first, second, "Identical inputs must yield equal results");
}

#[test]
fn test_duplicate_ingredients_are_harmless() {
    let catalog = vec![Recipe::new("Dobbel", 20)
        .with_ingredients(vec!["Egg".to_owned(), "Egg".to_owned()])];

    assert!(find_matching_recipe(&catalog, &labels(&["Egg"]), 20, 5).is_some());
}

#[test]
fn test_default_margin_is_five_minutes() {
    let catalog = taco_catalog();
    let selected = labels(&["Kjøttdeig"]);

    assert!(find_matching_recipe_default_margin(&catalog, &selected, 25).is_some());
    assert!(find_matching_recipe_default_margin(&catalog, &selected, 26).is_none());
}
