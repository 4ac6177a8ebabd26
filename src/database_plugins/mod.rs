// ABOUTME: Database abstraction layer for the Culinaire server
// ABOUTME: Plugin architecture for user accounts and per-user saved-dinner documents

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::models::{Recipe, SavedDinner, User};

pub mod factory;
pub mod sqlite;

/// Core database abstraction trait
///
/// All database implementations must implement this trait to provide
/// a consistent interface for the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> Result<()>;

    // ================================
    // User Management
    // ================================

    /// Create a new user account
    async fn create_user(&self, user: &User) -> Result<Uuid>;

    /// Get user by ID
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>>;

    /// Get user by email address
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get user by email (required - fails if not found)
    async fn get_user_by_email_required(&self, email: &str) -> Result<User>;

    /// Update user's last active timestamp
    async fn update_last_active(&self, user_id: Uuid) -> Result<()>;

    /// Get total number of users
    async fn get_user_count(&self) -> Result<i64>;

    // ================================
    // Saved Dinners
    // ================================

    /// Persist a recipe document for a user, returning the document ID
    async fn save_dinner(&self, user_id: Uuid, document: &Value) -> Result<String>;

    /// Get all saved dinners for a user, oldest first
    async fn get_saved_dinners(&self, user_id: Uuid) -> Result<Vec<SavedDinner>>;
}

/// Reconstruct a recipe from a schema-less stored document
///
/// The store enforces no schema, so every field degrades independently:
/// a missing or wrongly-typed `name` becomes the empty string, list fields
/// become empty lists, and `time` becomes 0.
#[must_use]
pub fn recipe_from_document(document: &Value) -> Recipe {
    Recipe {
        name: document
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        ingredients: string_list(document.get("ingredients")),
        description: string_list(document.get("description")),
        time: document
            .get("time")
            .and_then(Value::as_u64)
            .map_or(0, |t| u32::try_from(t).unwrap_or(u32::MAX)),
    }
}

/// Extract a list of strings from a document field, skipping non-strings
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document_reconstruction() {
        let document = json!({
            "name": "Taco",
            "ingredients": ["Kjøttdeig", "Ris"],
            "description": ["Stek", "Server"],
            "time": 20
        });

        let recipe = recipe_from_document(&document);
        assert_eq!(recipe.name, "Taco");
        assert_eq!(recipe.ingredients, vec!["Kjøttdeig", "Ris"]);
        assert_eq!(recipe.description, vec!["Stek", "Server"]);
        assert_eq!(recipe.time, 20);
    }

    #[test]
    fn test_missing_fields_default_per_field() {
        let recipe = recipe_from_document(&json!({}));

        assert_eq!(recipe.name, "");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.description.is_empty());
        assert_eq!(recipe.time, 0);
    }

    #[test]
    fn test_wrongly_typed_fields_degrade() {
        let document = json!({
            "name": 42,
            "ingredients": "not-a-list",
            "time": "twenty"
        });

        let recipe = recipe_from_document(&document);
        assert_eq!(recipe.name, "");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.time, 0);
    }
}
