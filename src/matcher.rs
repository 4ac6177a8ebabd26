// ABOUTME: Recipe matching against an ingredient selection and a time window
// ABOUTME: Pure first-match scan in dataset order with a symmetric tolerance margin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Recipe Matcher
//!
//! A recipe qualifies when its ingredient list contains every selected label
//! (exact string equality, no case folding) and its cooking time falls inside
//! `[target_time - margin, target_time + margin]` inclusive. The scan stops
//! at the first hit; ties break on dataset order, not score. First-match-wins
//! is deliberate and preserved as-is.
//!
//! The functions here are pure and reentrant: they take a catalog snapshot
//! and produce a result with no side effects, so concurrent callers need no
//! coordination.

use crate::constants::limits;
use crate::models::Recipe;

/// Find the first recipe matching the selected ingredients and time window
///
/// The margin window is evaluated in signed arithmetic: a margin larger than
/// the target produces a negative lower bound, which is used literally and
/// never clamped to zero.
#[must_use]
pub fn find_matching_recipe<'a>(
    recipes: &'a [Recipe],
    selected: &[String],
    target_time: u32,
    margin: u32,
) -> Option<&'a Recipe> {
    let lower = i64::from(target_time) - i64::from(margin);
    let upper = i64::from(target_time) + i64::from(margin);

    recipes.iter().find(|recipe| {
        selected
            .iter()
            .all(|label| recipe.ingredients.contains(label))
            && (lower..=upper).contains(&i64::from(recipe.time))
    })
}

/// [`find_matching_recipe`] with the standard 5-minute margin
#[must_use]
pub fn find_matching_recipe_default_margin<'a>(
    recipes: &'a [Recipe],
    selected: &[String],
    target_time: u32,
) -> Option<&'a Recipe> {
    find_matching_recipe(
        recipes,
        selected,
        target_time,
        limits::DEFAULT_TIME_MARGIN_MINS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("Omelett", 10)
                .with_ingredients(vec!["Egg".to_owned(), "Tomat".to_owned()]),
            Recipe::new("Kyllingwok", 25)
                .with_ingredients(vec!["Kylling".to_owned(), "Ris".to_owned()]),
        ]
    }

    #[test]
    fn test_first_match_wins_in_dataset_order() {
        let recipes = vec![
            Recipe::new("A", 20).with_ingredients(vec!["Egg".to_owned()]),
            Recipe::new("B", 20).with_ingredients(vec!["Egg".to_owned()]),
        ];
        let selected = vec!["Egg".to_owned()];

        let matched = find_matching_recipe(&recipes, &selected, 20, 5);
        assert_eq!(matched.map(|r| r.name.as_str()), Some("A"));
    }

    #[test]
    fn test_negative_lower_bound_is_not_clamped() {
        let recipes = vec![Recipe::new("Raskt", 0).with_ingredients(vec!["Egg".to_owned()])];
        let selected = vec!["Egg".to_owned()];

        // Window is [-3, 7]; a zero-minute recipe qualifies.
        assert!(find_matching_recipe(&recipes, &selected, 2, 5).is_some());
    }

    #[test]
    fn test_exact_case_sensitive_labels() {
        let recipes = catalog();
        let lowercase = vec!["egg".to_owned()];

        assert!(find_matching_recipe(&recipes, &lowercase, 10, 5).is_none());
    }

    #[test]
    fn test_default_margin_wrapper() {
        let recipes = catalog();
        let selected = vec!["Kylling".to_owned()];

        let matched = find_matching_recipe_default_margin(&recipes, &selected, 22);
        assert_eq!(matched.map(|r| r.name.as_str()), Some("Kyllingwok"));
    }
}
