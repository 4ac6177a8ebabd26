// ABOUTME: HTTP route assembly for the Culinaire server
// ABOUTME: Merges auth and dinner routers and applies shared middleware layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! HTTP routes
//!
//! Handlers are thin wrappers that delegate business logic to the service
//! layer; each router receives the shared [`ServerResources`] container as
//! axum state.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::ServerResources;

/// Authentication routes: registration and login
pub mod auth;

/// Dinner routes: ingredient lists, matching, saving, and listing
pub mod dinners;

/// Build the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(auth::AuthRoutes::routes(resources.clone()))
        .merge(dinners::DinnerRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
