// ABOUTME: Main library entry point for the Culinaire dinner-matching backend
// ABOUTME: Provides catalog loading, recipe matching, auth, and saved-dinner storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

#![deny(unsafe_code)]

//! # Culinaire Server
//!
//! Backend for the Culinaire dinner-picking app. A user selects up to one
//! ingredient per category (protein, carbohydrate, vegetable) and a target
//! cooking time; the server matches the selection against a bundled recipe
//! catalog and returns the first qualifying recipe. Authenticated users can
//! save matched recipes to their personal "My dinners" collection.
//!
//! ## Architecture
//!
//! - **Catalog**: tolerant loading of the bundled `recipes.txt` dataset
//! - **Matcher**: pure first-match scan with a symmetric time margin
//! - **Database**: pluggable per-user document storage (SQLite)
//! - **Auth**: bcrypt password hashing with HS256 JWT session tokens
//! - **Routes**: REST endpoints that delegate to the service layer
//!
//! ## Example Usage
//!
//! ```rust
//! use culinaire::catalog;
//! use culinaire::matcher::find_matching_recipe;
//!
//! let recipes = catalog::load_bundled();
//! let selected = vec!["Kjøttdeig".to_owned()];
//! let matched = find_matching_recipe(&recipes, &selected, 20, 5);
//! if let Some(recipe) = matched {
//!     println!("{} ({} min)", recipe.name, recipe.time);
//! }
//! ```

/// Authentication and session token management
pub mod auth;

/// Recipe catalog loading from the bundled dataset
pub mod catalog;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Dependency injection container for route state
pub mod context;

/// Database abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Recipe matching against an ingredient selection and time window
pub mod matcher;

/// Common data models for recipes, selections, and users
pub mod models;

/// `HTTP` routes for auth and dinner endpoints
pub mod routes;

/// Domain service layer for protocol-agnostic business logic
pub mod services;
