// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, database URLs, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! Environment-based configuration management for production deployment

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{defaults, env_config, limits};

/// Type-safe database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for `PostgreSQL`-style URLs; this deployment is
    /// SQLite-only.
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Err(anyhow::anyhow!(
                "PostgreSQL connection string detected, but this server only supports SQLite. \
                 Supported formats: sqlite:path/to/db.sqlite, sqlite::memory:"
            ))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/culinaire.db"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection target
    pub url: DatabaseUrl,
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

/// Recipe catalog configuration
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Optional operator-supplied dataset path; the bundled dataset is used
    /// when absent
    pub path: Option<PathBuf>,
}

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds
    pub http_port: u16,
    /// Database settings
    pub database: DatabaseConfig,
    /// Auth settings
    pub auth: AuthConfig,
    /// Catalog settings
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the database URL or the token expiry cannot be
    /// parsed.
    pub fn from_env() -> Result<Self> {
        let database_url = DatabaseUrl::parse_url(&env_config::database_url())?;

        let jwt_secret = env::var("CULINAIRE_JWT_SECRET").unwrap_or_else(|_| {
            warn!("CULINAIRE_JWT_SECRET not set, using development fallback secret");
            defaults::DEV_JWT_SECRET.to_owned()
        });

        let jwt_expiry_hours = match env::var("JWT_EXPIRY_HOURS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|e| anyhow::anyhow!("Invalid JWT_EXPIRY_HOURS '{value}': {e}"))?,
            Err(_) => limits::DEFAULT_SESSION_HOURS,
        };

        let catalog_path = env::var("CULINAIRE_CATALOG_PATH").ok().map(PathBuf::from);

        Ok(Self {
            http_port: env_config::http_port(),
            database: DatabaseConfig { url: database_url },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours,
            },
            catalog: CatalogConfig { path: catalog_path },
        })
    }

    /// One-line configuration summary for startup logging
    ///
    /// Secrets are never included.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database={} catalog={} jwt_expiry_hours={}",
            self.http_port,
            self.database.url.to_connection_string(),
            self.catalog
                .path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |p| p.display().to_string()),
            self.auth.jwt_expiry_hours
        )
    }
}
