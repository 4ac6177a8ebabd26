// ABOUTME: Dinner service - per-request catalog matching and saved-dinner persistence
// ABOUTME: Save is fire-and-forget; the write outcome surfaces only in logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Dinner Service
//!
//! Orchestrates the core pipeline: load a fresh catalog snapshot, run the
//! matcher, and optionally hand the matched recipe to the per-user document
//! store. The persistence hand-off is dispatched asynchronously with no
//! cancellation support and no backpressure; a write still pending when the
//! caller goes away is neither awaited nor cancelled.

use anyhow::Result;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::CatalogSource;
use crate::database_plugins::{factory::Database, DatabaseProvider};
use crate::matcher::find_matching_recipe;
use crate::models::{Recipe, SavedDinner, Selection};

/// Service for dinner matching and saved-dinner persistence
#[derive(Clone)]
pub struct DinnerService {
    database: Database,
    catalog_source: CatalogSource,
}

impl DinnerService {
    /// Create a new dinner service
    #[must_use]
    pub const fn new(database: Database, catalog_source: CatalogSource) -> Self {
        Self {
            database,
            catalog_source,
        }
    }

    /// Find the first recipe matching a selection
    ///
    /// Loads a fresh catalog snapshot for this call; a missing or malformed
    /// catalog degrades to an empty one and therefore to no match.
    #[must_use]
    pub fn find(&self, selection: &Selection) -> Option<Recipe> {
        let recipes = self.catalog_source.load();
        let selected = selection.labels();

        find_matching_recipe(
            &recipes,
            &selected,
            selection.target_time,
            selection.margin_or_default(),
        )
        .cloned()
    }

    /// Schedule a fire-and-forget write of a recipe to the user's collection
    ///
    /// Returns as soon as the write task is spawned. Success or failure is
    /// logged; there is no retry and nothing to roll back.
    pub fn save_in_background(&self, user_id: Uuid, recipe: Recipe) {
        let document = json!({
            "name": recipe.name,
            "ingredients": recipe.ingredients,
            "description": recipe.description,
            "time": recipe.time,
        });

        let database = self.database.clone();
        tokio::spawn(async move {
            match database.save_dinner(user_id, &document).await {
                Ok(id) => {
                    info!(user.id = %user_id, dinner.id = %id, "Recipe saved successfully");
                }
                Err(e) => {
                    warn!(user.id = %user_id, error = %e, "Error saving recipe");
                }
            }
        });
    }

    /// List the user's saved dinners, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_saved(&self, user_id: Uuid) -> Result<Vec<SavedDinner>> {
        self.database.get_saved_dinners(user_id).await
    }
}
