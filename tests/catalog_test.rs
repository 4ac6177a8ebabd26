// ABOUTME: Integration tests for catalog loading
// ABOUTME: Covers malformed-resource resilience, order preservation, and field defaults
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Tests for the catalog loader including:
//! - Silent-degrade on unreadable or malformed resources
//! - Dataset order preservation
//! - Per-field serde defaults

use std::io::Write;
use std::path::Path;

use culinaire::catalog::{load_bundled, load_from_path, load_from_str, CatalogSource};
use culinaire::matcher::find_matching_recipe;

// ============================================================================
// Resilience
// ============================================================================

#[test]
fn test_malformed_text_yields_empty_catalog() {
    assert!(load_from_str("definitely not json").is_empty());
    assert!(load_from_str("{\"name\": \"object, not array\"}").is_empty());
    assert!(load_from_str("[{\"name\": \"truncated\"").is_empty());
    assert!(load_from_str("").is_empty());
}

#[test]
fn test_missing_file_yields_empty_catalog() {
    let recipes = load_from_path(Path::new("/nonexistent/recipes.txt"));
    assert!(recipes.is_empty(), "Unreadable resource must degrade");
}

#[test]
fn test_matching_on_degraded_catalog_finds_nothing() {
    let recipes = load_from_str("corrupt payload");
    let selected = vec!["Kjøttdeig".to_owned()];

    assert!(find_matching_recipe(&recipes, &selected, 20, 5).is_none());
}

// ============================================================================
// Well-Formed Datasets
// ============================================================================

#[test]
fn test_dataset_order_is_preserved() {
    let source = r#"[
        {"name": "Første", "ingredients": [], "description": [], "time": 10},
        {"name": "Andre", "ingredients": [], "description": [], "time": 20},
        {"name": "Tredje", "ingredients": [], "description": [], "time": 30}
    ]"#;

    let recipes = load_from_str(source);
    let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Første", "Andre", "Tredje"]);
}

#[test]
fn test_missing_fields_default_per_field() {
    let source = r#"[{"name": "Sparsom"}]"#;

    let recipes = load_from_str(source);
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Sparsom");
    assert!(recipes[0].ingredients.is_empty());
    assert!(recipes[0].description.is_empty());
    assert_eq!(recipes[0].time, 0);
}

#[test]
fn test_load_from_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Fil", "ingredients": ["Egg"], "description": ["Kok"], "time": 8}}]"#
    )
    .unwrap();

    let recipes = load_from_path(file.path());
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Fil");
    assert_eq!(recipes[0].time, 8);
}

// ============================================================================
// Bundled Dataset
// ============================================================================

#[test]
fn test_bundled_dataset_is_usable() {
    let recipes = load_bundled();
    assert!(!recipes.is_empty(), "Bundled recipes.txt must parse");

    // Every bundled recipe is complete: named, with ingredients and steps.
    for recipe in &recipes {
        assert!(!recipe.name.is_empty());
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.description.is_empty());
    }
}

#[test]
fn test_catalog_source_selects_bundled_or_file() {
    assert!(!CatalogSource::Bundled.load().is_empty());

    let missing = CatalogSource::File("/nonexistent/recipes.txt".into());
    assert!(missing.load().is_empty());
}

#[test]
fn test_bundled_taco_scenario() {
    let recipes = load_bundled();
    let selected = vec!["Kjøttdeig".to_owned()];

    let matched = find_matching_recipe(&recipes, &selected, 20, 5).unwrap();
    assert_eq!(matched.name, "Taco");
}
