// ABOUTME: Database factory and provider abstraction
// ABOUTME: Provides a unified interface with runtime database selection from the URL
//! Database factory for creating database providers
//!
//! This module provides automatic database type detection and creation
//! based on connection strings.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;
use crate::models::{SavedDinner, User};

/// Supported database types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded file-based SQLite
    SQLite,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// SQLite backend
    SQLite(SqliteDatabase),
}

impl Database {
    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Embedded)",
        }
    }

    /// Get the database type enum
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }

    /// Create a new database instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database URL format is unsupported or invalid
    /// - Database connection fails
    /// - Database initialization or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        debug!("Detecting database type from URL: {}", database_url);
        let db_type = detect_database_type(database_url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                info!("Initializing SQLite database");
                let db = SqliteDatabase::new(database_url).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
        }
    }
}

/// Automatically detect database type from connection string
///
/// # Errors
///
/// Returns an error if the URL format is not recognized (must start with
/// `sqlite:`) or names a `PostgreSQL` server, which this deployment does not
/// support.
pub fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        Ok(DatabaseType::SQLite)
    } else if database_url.starts_with("postgresql://") || database_url.starts_with("postgres://") {
        Err(anyhow!(
            "PostgreSQL connection string detected, but this server only supports SQLite"
        ))
    } else {
        Err(anyhow!(
            "Unsupported database URL format: {}. Supported format: sqlite:path/to/db.sqlite",
            database_url
        ))
    }
}

// Implement DatabaseProvider for the enum by delegating to the appropriate implementation
#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        Self::new(database_url).await
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        match self {
            Self::SQLite(db) => db.create_user(user).await,
        }
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        match self {
            Self::SQLite(db) => db.get_user(user_id).await,
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        match self {
            Self::SQLite(db) => db.get_user_by_email(email).await,
        }
    }

    async fn get_user_by_email_required(&self, email: &str) -> Result<User> {
        match self {
            Self::SQLite(db) => db.get_user_by_email_required(email).await,
        }
    }

    async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        match self {
            Self::SQLite(db) => db.update_last_active(user_id).await,
        }
    }

    async fn get_user_count(&self) -> Result<i64> {
        match self {
            Self::SQLite(db) => db.get_user_count().await,
        }
    }

    async fn save_dinner(&self, user_id: Uuid, document: &Value) -> Result<String> {
        match self {
            Self::SQLite(db) => db.save_dinner(user_id, document).await,
        }
    }

    async fn get_saved_dinners(&self, user_id: Uuid) -> Result<Vec<SavedDinner>> {
        match self {
            Self::SQLite(db) => db.get_saved_dinners(user_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_database_type() {
        assert_eq!(
            detect_database_type("sqlite::memory:").unwrap(),
            DatabaseType::SQLite
        );
        assert_eq!(
            detect_database_type("sqlite:./data/culinaire.db").unwrap(),
            DatabaseType::SQLite
        );
        assert!(detect_database_type("postgresql://localhost/db").is_err());
        assert!(detect_database_type("mysql://localhost/db").is_err());
    }
}
