// ABOUTME: Dependency injection container shared across route handlers
// ABOUTME: Replaces ambient singletons with explicitly wired resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Server Resources
//!
//! All collaborators are constructed once in the server binary and passed
//! down explicitly; no module resolves a database, auth manager, or catalog
//! from global state.

use crate::auth::AuthManager;
use crate::catalog::CatalogSource;
use crate::database_plugins::factory::Database;
use crate::services::dinners::DinnerService;

/// Dependency container handed to route state as `Arc<ServerResources>`
pub struct ServerResources {
    /// User and saved-dinner storage
    pub database: Database,
    /// Session token issuing and validation
    pub auth_manager: AuthManager,
    /// Dinner matching and persistence service
    pub dinners: DinnerService,
}

impl ServerResources {
    /// Wire up the resource container
    #[must_use]
    pub fn new(
        database: Database,
        auth_manager: AuthManager,
        catalog_source: CatalogSource,
    ) -> Self {
        let dinners = DinnerService::new(database.clone(), catalog_source);
        Self {
            database,
            auth_manager,
            dinners,
        }
    }
}
