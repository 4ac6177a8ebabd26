// ABOUTME: JWT-based user authentication and session token management
// ABOUTME: Handles token generation, validation, and detailed validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Culinaire

//! # Authentication and Session Management
//!
//! This module provides HS256 `JWT` session tokens for the Culinaire server.
//! Password hashing lives at the route layer (bcrypt); this module only
//! issues and validates tokens.

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::constants::jwt;
use crate::models::User;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature is invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl std::fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenExpired {
                expired_at,
                current_time,
            } => {
                let duration_expired = current_time.signed_duration_since(*expired_at);
                if duration_expired.num_minutes() < 60 {
                    write!(
                        f,
                        "JWT token expired {} minutes ago at {}",
                        duration_expired.num_minutes(),
                        expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                    )
                } else {
                    write!(
                        f,
                        "JWT token expired {} hours ago at {}",
                        duration_expired.num_hours(),
                        expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                    )
                }
            }
            Self::TokenInvalid { reason } => {
                write!(f, "JWT token signature is invalid: {reason}")
            }
            Self::TokenMalformed { details } => {
                write!(f, "JWT token is malformed: {details}")
            }
        }
    }
}

impl std::error::Error for JwtValidationError {}

/// `JWT` claims for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

/// Authentication manager for `JWT` session tokens
#[derive(Clone)]
pub struct AuthManager {
    secret: Vec<u8>,
    token_expiry_hours: i64,
}

impl AuthManager {
    /// Create a new authentication manager
    #[must_use]
    pub const fn new(secret: Vec<u8>, token_expiry_hours: i64) -> Self {
        Self {
            secret,
            token_expiry_hours,
        }
    }

    /// Generate a `JWT` token for a user
    ///
    /// # Errors
    ///
    /// Returns an error if `JWT` encoding fails due to invalid claims
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::hours(self.token_expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            aud: jwt::AUDIENCE.to_owned(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )?;

        Ok(token)
    }

    /// Validate a `JWT` token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing whether the token is
    /// expired, has a bad signature, or is malformed.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[jwt::AUDIENCE]);

        match decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(self.map_validation_error(token, &e)),
        }
    }

    /// Map a `jsonwebtoken` error into the detailed taxonomy
    fn map_validation_error(
        &self,
        token: &str,
        error: &jsonwebtoken::errors::Error,
    ) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::ExpiredSignature => {
                let expired_at = self
                    .expiry_of(token)
                    .unwrap_or_else(|| Utc.timestamp_opt(0, 0).single().unwrap_or_default());
                JwtValidationError::TokenExpired {
                    expired_at,
                    current_time: Utc::now(),
                }
            }
            ErrorKind::InvalidToken => JwtValidationError::TokenMalformed {
                details: "Token format is invalid".into(),
            },
            ErrorKind::Base64(base64_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid base64: {base64_err}"),
            },
            ErrorKind::Json(json_err) => JwtValidationError::TokenMalformed {
                details: format!("Token contains invalid JSON: {json_err}"),
            },
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {error}"),
            },
        }
    }

    /// Recover the `exp` claim from an otherwise-expired token for reporting
    ///
    /// The signature is still verified; only the expiry check is skipped.
    fn expiry_of(&self, token: &str) -> Option<DateTime<Utc>> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[jwt::AUDIENCE]);
        validation.validate_exp = false;

        decode::<Claims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .ok()
            .and_then(|data| Utc.timestamp_opt(data.claims.exp, 0).single())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "kokk@example.com".to_owned(),
            "not-a-real-hash".to_owned(),
            Some("Kokken".to_owned()),
        )
    }

    #[test]
    fn test_token_round_trip() {
        let manager = AuthManager::new(b"test-secret".to_vec(), 24);
        let user = test_user();

        let token = manager.generate_token(&user).unwrap();
        let claims = manager.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.aud, "culinaire");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = AuthManager::new(b"secret-a".to_vec(), 24);
        let verifier = AuthManager::new(b"secret-b".to_vec(), 24);

        let token = issuer.generate_token(&test_user()).unwrap();
        let error = verifier.validate_token(&token).unwrap_err();

        assert!(matches!(error, JwtValidationError::TokenInvalid { .. }));
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = AuthManager::new(b"test-secret".to_vec(), -1);

        let token = manager.generate_token(&test_user()).unwrap();
        let error = manager.validate_token(&token).unwrap_err();

        assert!(matches!(error, JwtValidationError::TokenExpired { .. }));
    }

    #[test]
    fn test_garbage_token_malformed() {
        let manager = AuthManager::new(b"test-secret".to_vec(), 24);

        let error = manager.validate_token("not-a-jwt").unwrap_err();
        assert!(matches!(error, JwtValidationError::TokenMalformed { .. }));
    }
}
