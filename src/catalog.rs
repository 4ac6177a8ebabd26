// ABOUTME: Recipe catalog loading from the bundled recipes.txt dataset
// ABOUTME: Deserializes best-effort and yields an empty catalog on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Recipe Catalog
//!
//! The catalog is a JSON array of recipe objects bundled into the binary as
//! `recipes.txt`. Loading is deliberately tolerant: a missing file or a
//! malformed payload is logged and recovered as an empty catalog, never
//! surfaced to the caller. Dataset order is preserved; no filtering,
//! validation, or normalization is performed beyond serde's per-field
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::Recipe;

/// The recipe dataset compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("catalog/recipes.txt");

/// Internal failure taxonomy for catalog loading
///
/// Used for logging only; it never crosses the loader's public boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Resource missing or I/O failure
    #[error("catalog resource unreadable: {0}")]
    Unreadable(#[from] std::io::Error),

    /// Payload is not a well-formed recipe array
    #[error("catalog resource malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Deserialize a catalog from raw JSON text
///
/// Returns an empty catalog on malformed input.
#[must_use]
pub fn load_from_str(source: &str) -> Vec<Recipe> {
    match serde_json::from_str::<Vec<Recipe>>(source) {
        Ok(recipes) => {
            debug!("Loaded {} recipes from catalog source", recipes.len());
            recipes
        }
        Err(e) => {
            warn!("Failed to parse recipe catalog: {}", CatalogError::from(e));
            Vec::new()
        }
    }
}

/// Load a catalog from a file on disk
///
/// Returns an empty catalog when the file cannot be read or parsed.
#[must_use]
pub fn load_from_path(path: &Path) -> Vec<Recipe> {
    match fs::read_to_string(path) {
        Ok(content) => load_from_str(&content),
        Err(e) => {
            warn!(
                "Failed to read recipe catalog {}: {}",
                path.display(),
                CatalogError::from(e)
            );
            Vec::new()
        }
    }
}

/// Load the catalog bundled into the binary
#[must_use]
pub fn load_bundled() -> Vec<Recipe> {
    load_from_str(BUNDLED_CATALOG)
}

/// Where a catalog load reads its dataset from
///
/// Injected into the service layer so callers never resolve the source from
/// ambient state.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// The compile-time bundled `recipes.txt`
    Bundled,
    /// An operator-supplied file on disk
    File(PathBuf),
}

impl CatalogSource {
    /// Load a fresh catalog snapshot from this source
    ///
    /// Each call re-reads the source; callers receive their own snapshot.
    #[must_use]
    pub fn load(&self) -> Vec<Recipe> {
        match self {
            Self::Bundled => load_bundled(),
            Self::File(path) => load_from_path(path),
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Bundled
    }
}
