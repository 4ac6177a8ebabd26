// ABOUTME: Dinner route handlers - ingredient lists, matching, saving, and "My dinners"
// ABOUTME: Matching is open; saving and listing require a Bearer session token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Dinner routes
//!
//! The find endpoint is unauthenticated: matching is a pure function of the
//! request and the catalog. Persistence is the authenticated part - saving a
//! dinner and listing the per-user collection both require a valid session
//! token.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::JwtValidationError;
use crate::constants::{error_messages, limits};
use crate::context::ServerResources;
use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::models::{ingredient_categories, Recipe, Selection};

/// Ingredient picker configuration for the client
#[derive(Debug, Serialize)]
pub struct IngredientsResponse {
    /// Protein options
    pub proteins: Vec<String>,
    /// Carbohydrate options
    pub carbohydrates: Vec<String>,
    /// Vegetable options
    pub vegetables: Vec<String>,
    /// Upper bound of the target-time slider
    pub max_target_time_mins: u32,
}

/// Result of a matching request
#[derive(Debug, Serialize)]
pub struct FindDinnerResponse {
    /// The first qualifying recipe, or null when none qualified
    pub recipe: Option<Recipe>,
    /// Display message mirroring the client UI
    pub message: String,
}

/// Acknowledgment that a save was scheduled
#[derive(Debug, Serialize)]
pub struct SaveDinnerResponse {
    /// Display message mirroring the client UI
    pub message: String,
}

/// One entry of the "My dinners" listing
#[derive(Debug, Serialize)]
pub struct SavedDinnerEntry {
    /// Store-assigned document ID
    pub id: String,
    /// The reconstructed recipe
    pub recipe: Recipe,
    /// When the dinner was saved, RFC 3339
    pub saved_at: String,
}

/// The "My dinners" listing
#[derive(Debug, Serialize)]
pub struct ListDinnersResponse {
    /// Saved dinners, oldest first
    pub dinners: Vec<SavedDinnerEntry>,
    /// Number of entries
    pub total: usize,
}

/// Dinner routes handler
pub struct DinnerRoutes;

impl DinnerRoutes {
    /// Create all dinner routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ingredients", get(Self::handle_ingredients))
            .route("/api/dinners/find", post(Self::handle_find))
            .route("/api/dinners/save", post(Self::handle_save))
            .route("/api/dinners", get(Self::handle_list))
            .with_state(resources)
    }

    /// Extract and authenticate the user from the Authorization header
    async fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<Uuid, AppError> {
        let auth_header = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(AppError::auth_required)?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::auth_invalid("Invalid authorization header format - must be 'Bearer <token>'")
        })?;

        let claims = resources
            .auth_manager
            .validate_token(token)
            .map_err(|e| match e {
                JwtValidationError::TokenExpired { .. } => AppError::auth_expired(),
                _ => AppError::auth_invalid(format!("JWT validation failed: {e}")),
            })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Invalid user ID in token"))?;

        // The token may outlive the account
        resources
            .database
            .get_user(user_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up user: {e}")))?
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;

        Ok(user_id)
    }

    /// Handle GET /api/ingredients - picker configuration
    async fn handle_ingredients() -> Response {
        let response = IngredientsResponse {
            proteins: to_owned_labels(ingredient_categories::PROTEINS),
            carbohydrates: to_owned_labels(ingredient_categories::CARBOHYDRATES),
            vegetables: to_owned_labels(ingredient_categories::VEGETABLES),
            max_target_time_mins: limits::MAX_TARGET_TIME_MINS,
        };

        (StatusCode::OK, Json(response)).into_response()
    }

    /// Handle POST /api/dinners/find - match a selection against the catalog
    ///
    /// A no-match result is a normal response, not an error.
    async fn handle_find(
        State(resources): State<Arc<ServerResources>>,
        Json(selection): Json<Selection>,
    ) -> Result<Response, AppError> {
        let matched = resources.dinners.find(&selection);

        let message = matched.as_ref().map_or_else(
            || error_messages::NO_RECIPE_FOUND.to_owned(),
            |recipe| format!("{} {} min", recipe.name, recipe.time),
        );

        let response = FindDinnerResponse {
            recipe: matched,
            message,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/dinners/save - schedule a fire-and-forget save
    ///
    /// Acknowledges scheduling, not completion; the write outcome is
    /// observable only in the server logs.
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(recipe): Json<Recipe>,
    ) -> Result<Response, AppError> {
        let user_id = Self::authenticate(&headers, &resources).await?;

        info!(user.id = %user_id, recipe.name = %recipe.name, "Scheduling dinner save");
        resources.dinners.save_in_background(user_id, recipe);

        let response = SaveDinnerResponse {
            message: error_messages::RECIPE_SAVED.to_owned(),
        };

        Ok((StatusCode::ACCEPTED, Json(response)).into_response())
    }

    /// Handle GET /api/dinners - list the user's saved dinners
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let user_id = Self::authenticate(&headers, &resources).await?;

        let dinners = resources
            .dinners
            .list_saved(user_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to list saved dinners: {e}")))?;

        let entries: Vec<SavedDinnerEntry> = dinners
            .into_iter()
            .map(|dinner| SavedDinnerEntry {
                id: dinner.id,
                recipe: dinner.recipe,
                saved_at: dinner.created_at.to_rfc3339(),
            })
            .collect();

        let total = entries.len();
        let response = ListDinnersResponse {
            dinners: entries,
            total,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

/// Copy a static label list into owned strings for serialization
fn to_owned_labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}
