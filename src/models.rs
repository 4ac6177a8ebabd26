// ABOUTME: Common data models for recipes, ingredient selections, and user accounts
// ABOUTME: Defines Recipe, Selection, SavedDinner, User, and the ingredient category lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Data Models
//!
//! Value types shared across the catalog, matcher, database, and route
//! layers. `Recipe` instances are immutable after creation; they are produced
//! by catalog deserialization or by reconstruction from the document store
//! and are never mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits;

/// Fixed ingredient category labels offered by the client pickers
///
/// The labels are data, not identifiers: matching compares them against
/// recipe ingredient strings exactly, with no case folding.
pub mod ingredient_categories {
    /// Protein options
    pub const PROTEINS: &[&str] = &["Kjøttdeig", "Kylling", "Fisk", "Tofu", "Egg"];

    /// Carbohydrate options
    pub const CARBOHYDRATES: &[&str] = &["Ris", "Pasta", "Poteter", "Brød", "Quinoa"];

    /// Vegetable options
    pub const VEGETABLES: &[&str] = &["Gulrot", "Brokoli", "Paprika", "Løk", "Spinach", "Tomat"];
}

/// A single recipe from the catalog or the saved-dinners store
///
/// Every field carries a serde default: both the bundled dataset and the
/// per-user document store are schema-less, so reconstruction degrades
/// field-by-field (missing `time` becomes 0, missing lists become empty)
/// instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Ingredient labels; duplicates permitted, order irrelevant to matching
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps in cooking order
    #[serde(default)]
    pub description: Vec<String>,
    /// Cooking time in minutes
    #[serde(default)]
    pub time: u32,
}

impl Recipe {
    /// Create a new recipe with a name and cooking time
    #[must_use]
    pub fn new(name: impl Into<String>, time: u32) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            description: Vec::new(),
            time,
        }
    }

    /// Set the ingredient list
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Set the instruction steps
    #[must_use]
    pub fn with_description(mut self, steps: Vec<String>) -> Self {
        self.description = steps;
        self
    }
}

/// One matching request: the user's chosen labels and target time
///
/// Transient request state, never persisted. At most one label per category;
/// each category is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen protein label, if any
    #[serde(default)]
    pub protein: Option<String>,
    /// Chosen carbohydrate label, if any
    #[serde(default)]
    pub carbohydrate: Option<String>,
    /// Chosen vegetable label, if any
    #[serde(default)]
    pub vegetable: Option<String>,
    /// Target cooking time in minutes (client slider range 0-30)
    #[serde(default)]
    pub target_time: u32,
    /// Symmetric tolerance in minutes; defaults to 5 when absent
    #[serde(default)]
    pub margin: Option<u32>,
}

impl Selection {
    /// Collect the non-null labels in category order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        [&self.protein, &self.carbohydrate, &self.vegetable]
            .into_iter()
            .filter_map(|label| label.clone())
            .collect()
    }

    /// The margin to apply, falling back to the default tolerance
    #[must_use]
    pub fn margin_or_default(&self) -> u32 {
        self.margin.unwrap_or(limits::DEFAULT_TIME_MARGIN_MINS)
    }
}

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email, unique across users
    pub email: String,
    /// Optional display name
    pub display_name: Option<String>,
    /// bcrypt hash of the user's password
    pub password_hash: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last authenticated activity timestamp
    pub last_active: DateTime<Utc>,
    /// Whether the account may log in
    pub is_active: bool,
}

impl User {
    /// Create a new user with the given email and password hash
    #[must_use]
    pub fn new(email: String, password_hash: String, display_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            display_name,
            password_hash,
            created_at: now,
            last_active: now,
            is_active: true,
        }
    }
}

/// A recipe saved to a user's "My dinners" collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDinner {
    /// Store-assigned document identifier
    pub id: String,
    /// The reconstructed recipe document
    pub recipe: Recipe,
    /// When the document was written
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_labels_skip_empty_categories() {
        let selection = Selection {
            protein: Some("Kylling".to_owned()),
            carbohydrate: None,
            vegetable: Some("Paprika".to_owned()),
            target_time: 20,
            margin: None,
        };

        assert_eq!(selection.labels(), vec!["Kylling", "Paprika"]);
    }

    #[test]
    fn test_selection_default_margin() {
        let selection = Selection::default();
        assert_eq!(selection.margin_or_default(), 5);

        let explicit = Selection {
            margin: Some(0),
            ..Selection::default()
        };
        assert_eq!(explicit.margin_or_default(), 0);
    }

    #[test]
    fn test_recipe_deserializes_with_missing_fields() {
        let recipe: Recipe = serde_json::from_str(r#"{"name": "Taco"}"#).unwrap();

        assert_eq!(recipe.name, "Taco");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.description.is_empty());
        assert_eq!(recipe.time, 0);
    }
}
