// ABOUTME: System-wide constants and configuration values for the Culinaire backend
// ABOUTME: Contains matching limits, auth defaults, and environment-based configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable
//! configuration.

use std::env;

/// Service identifiers for structured logging
pub mod service_names {
    /// Name of the server binary
    pub const CULINAIRE_SERVER: &str = "culinaire-server";
}

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .unwrap_or_else(|_| crate::constants::defaults::DEFAULT_HTTP_PORT.to_string())
            .parse()
            .unwrap_or(crate::constants::defaults::DEFAULT_HTTP_PORT)
    }

    /// Get the database URL from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("CULINAIRE_DATABASE_URL")
            .unwrap_or_else(|_| crate::constants::defaults::DEFAULT_DATABASE_URL.into())
    }
}

/// Matching and session limits
pub mod limits {
    /// Symmetric tolerance (minutes) applied to the target time when the
    /// caller does not provide one
    pub const DEFAULT_TIME_MARGIN_MINS: u32 = 5;

    /// Upper bound of the target-time slider in the client UI
    pub const MAX_TARGET_TIME_MINS: u32 = 30;

    /// Default `JWT` session lifetime in hours
    pub const DEFAULT_SESSION_HOURS: i64 = 24;

    /// Minimum accepted password length for registration
    pub const MIN_PASSWORD_LENGTH: usize = 8;
}

/// Hardcoded defaults used when the environment provides nothing
pub mod defaults {
    /// Default `HTTP` port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;

    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/culinaire.db";

    /// Development-only fallback `JWT` secret; a warning is logged when used
    pub const DEV_JWT_SECRET: &str = "culinaire-dev-secret-change-me";
}

/// `JWT` claim constants
pub mod jwt {
    /// Audience embedded in and required from every session token
    pub const AUDIENCE: &str = "culinaire";
}

/// User-facing message strings
///
/// Recipe-related messages stay in Norwegian to match the client app; the
/// auth validation messages are API-level and English.
pub mod error_messages {
    /// Registration rejected: email does not look like an email
    pub const INVALID_EMAIL_FORMAT: &str = "Invalid email format";

    /// Registration rejected: password too short
    pub const PASSWORD_TOO_WEAK: &str = "Password must be at least 8 characters";

    /// Registration rejected: email already registered
    pub const USER_ALREADY_EXISTS: &str = "A user with this email already exists";

    /// Login rejected
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

    /// No recipe qualified for the selection
    pub const NO_RECIPE_FOUND: &str = "Ingen oppskrift funnet.";

    /// Save acknowledged (scheduling, not completion)
    pub const RECIPE_SAVED: &str = "Oppskrift lagret!";
}
