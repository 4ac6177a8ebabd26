//! SQLite database implementation
//!
//! Users are stored relationally; saved dinners are stored as schema-less
//! JSON documents in a TEXT column, mirroring the document-store collaborator
//! the client app was written against. Reconstruction from a document
//! tolerates missing or wrongly-typed fields.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::{recipe_from_document, DatabaseProvider};
use crate::models::{SavedDinner, User};

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Map a users-table row into a `User`
    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let last_active: String = row.try_get("last_active")?;

        Ok(User {
            id: Uuid::parse_str(&id)?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            password_hash: row.try_get("password_hash")?,
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
            last_active: DateTime::parse_from_rfc3339(&last_active)?.with_timezone(&Utc),
            is_active: row.try_get("is_active")?,
        })
    }

    /// Map a saved-dinners row into a `SavedDinner`
    ///
    /// A corrupt document column degrades to an all-defaults recipe rather
    /// than failing the whole listing.
    fn row_to_saved_dinner(row: &sqlx::sqlite::SqliteRow) -> Result<SavedDinner> {
        let id: String = row.try_get("id")?;
        let document_text: String = row.try_get("document")?;
        let created_at: String = row.try_get("created_at")?;

        let document: Value = serde_json::from_str(&document_text).unwrap_or(Value::Null);

        Ok(SavedDinner {
            id,
            recipe: recipe_from_document(&document),
            created_at: DateTime::parse_from_rfc3339(&created_at)?.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let is_memory = database_url.contains(":memory:");

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") && !is_memory {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // An in-memory SQLite database exists per connection; the pool must
        // hold exactly one live connection or the schema disappears between
        // checkouts.
        let pool = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&connection_options)
                .await?
        } else {
            SqlitePool::connect(&connection_options).await?
        };

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // Create users table
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                display_name TEXT,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Create index on email for fast lookups
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        // Create saved_dinners table; the document column is schema-less JSON
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_dinners (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_saved_dinners_user_id ON saved_dinners(user_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, display_name, password_hash, created_at, last_active, is_active)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.password_hash)
        .bind(user.created_at.to_rfc3339())
        .bind(user.last_active.to_rfc3339())
        .bind(user.is_active)
        .execute(&self.pool)
        .await?;

        Ok(user.id)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn get_user_by_email_required(&self, email: &str) -> Result<User> {
        match self.get_user_by_email(email).await? {
            Some(user) => Ok(user),
            None => Err(anyhow::anyhow!("User not found")),
        }
    }

    async fn update_last_active(&self, user_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE users SET last_active = ?1 WHERE id = ?2")
            .bind(Utc::now().to_rfc3339())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_user_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }

    async fn save_dinner(&self, user_id: Uuid, document: &Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r"
            INSERT INTO saved_dinners (id, user_id, document, created_at)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(&id)
        .bind(user_id.to_string())
        .bind(serde_json::to_string(document)?)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get_saved_dinners(&self, user_id: Uuid) -> Result<Vec<SavedDinner>> {
        let rows = sqlx::query(
            r"
            SELECT id, document, created_at FROM saved_dinners
            WHERE user_id = ?1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_saved_dinner).collect()
    }
}
