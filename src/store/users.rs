//! Users collection: records and repository contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

/// Minimum accepted username length, in characters
pub const MIN_USERNAME_LEN: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub favorite_genre: String,
    /// Bcrypt hash of the account password
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub favorite_genre: String,
    pub password_hash: String,
}

/// Persistent collection of users
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Insert a new user; `username` must be unique and at least
    /// [`MIN_USERNAME_LEN`] characters
    async fn insert(&self, user: CreateUser) -> Result<UserRecord, StoreError>;

    /// Get a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    /// Get a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;
}
