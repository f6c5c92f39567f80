//! Authentication service
//!
//! Owns user registration, credential checks, and token issuing. Passwords
//! are stored as bcrypt hashes and sessions are stateless HS256 JWTs carrying
//! the user id and username. Login failures are reported with a single
//! generic message so the API never reveals which part was wrong.

use std::env;

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::store::{CreateUser, Store, StoreError, UserRecord};

// ============================================================================
// JWT Claims
// ============================================================================

/// Claims carried in a signed access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// How long issued tokens stay valid (default: 7 days)
    pub token_lifetime: Duration,
    /// Bcrypt cost factor, lower this in tests
    pub bcrypt_cost: u32,
    /// Password assigned to every new account until a password flow exists
    pub default_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            token_lifetime: Duration::days(7),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            default_password: "secret".to_string(),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_lifetime: env::var("TOKEN_LIFETIME_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::seconds)
                .unwrap_or(defaults.token_lifetime),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
            default_password: env::var("DEFAULT_USER_PASSWORD")
                .unwrap_or(defaults.default_password),
        }
    }
}

// ============================================================================
// Auth Service
// ============================================================================

/// Why a login attempt was rejected
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown username or wrong password, never disclosed which
    #[error("wrong credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: Store,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(store: Store, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Register a new account with the configured default password
    pub async fn create_user(
        &self,
        username: String,
        favorite_genre: String,
    ) -> Result<UserRecord, StoreError> {
        let password_hash = bcrypt::hash(&self.config.default_password, self.config.bcrypt_cost)
            .map_err(|e| StoreError::Backend(e.into()))?;

        let user = self
            .store
            .users()
            .insert(CreateUser {
                username,
                favorite_genre,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Check credentials and issue a signed token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, LoginError> {
        let user = self
            .store
            .users()
            .find_by_username(username)
            .await
            .map_err(anyhow::Error::from)?;

        let Some(user) = user else {
            tracing::warn!(username, "Login attempt for unknown user");
            return Err(LoginError::InvalidCredentials);
        };

        let valid = bcrypt::verify(password, &user.password_hash).map_err(anyhow::Error::from)?;
        if !valid {
            tracing::warn!(username, "Login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        let token = self.issue_token(&user).map_err(anyhow::Error::from)?;
        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(token)
    }

    /// Sign an access token for the given user
    pub fn issue_token(&self, user: &UserRecord) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            exp: (now + self.config.token_lifetime).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
    }
}
