// ABOUTME: Integration tests for environment-based configuration
// ABOUTME: Serialized because they mutate process environment variables
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Tests for `ServerConfig::from_env` and the typed database URL

use std::env;

use serial_test::serial;

use culinaire::config::environment::{DatabaseUrl, ServerConfig};

fn clear_env() {
    env::remove_var("HTTP_PORT");
    env::remove_var("CULINAIRE_DATABASE_URL");
    env::remove_var("CULINAIRE_JWT_SECRET");
    env::remove_var("JWT_EXPIRY_HOURS");
    env::remove_var("CULINAIRE_CATALOG_PATH");
}

#[test]
#[serial]
fn test_defaults_when_environment_is_empty() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8081);
    assert_eq!(
        config.database.url.to_connection_string(),
        "sqlite:./data/culinaire.db"
    );
    assert_eq!(config.auth.jwt_expiry_hours, 24);
    assert!(config.catalog.path.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HTTP_PORT", "9999");
    env::set_var("CULINAIRE_DATABASE_URL", "sqlite::memory:");
    env::set_var("JWT_EXPIRY_HOURS", "48");
    env::set_var("CULINAIRE_CATALOG_PATH", "/tmp/recipes.txt");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 9999);
    assert!(config.database.url.is_memory());
    assert_eq!(config.auth.jwt_expiry_hours, 48);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("/tmp/recipes.txt"))
    );

    clear_env();
}

#[test]
#[serial]
fn test_invalid_expiry_is_rejected() {
    clear_env();
    env::set_var("JWT_EXPIRY_HOURS", "soon");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_postgres_url_is_rejected() {
    clear_env();
    env::set_var("CULINAIRE_DATABASE_URL", "postgresql://localhost/culinaire");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
fn test_database_url_fallback_is_sqlite_path() {
    let url = DatabaseUrl::parse_url("./some/file.db").unwrap();
    assert_eq!(url.to_connection_string(), "sqlite:./some/file.db");
}

#[test]
#[serial]
fn test_summary_never_contains_the_secret() {
    clear_env();
    env::set_var("CULINAIRE_JWT_SECRET", "super-hemmelig");

    let config = ServerConfig::from_env().unwrap();
    assert!(!config.summary().contains("super-hemmelig"));

    clear_env();
}
