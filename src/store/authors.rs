//! Authors collection: records and repository contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub name: String,
    pub born: Option<i32>,
    /// Ids of this author's books, in creation order
    pub books: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
    pub born: Option<i32>,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateAuthor {
    /// Set the birth year
    pub born: Option<i32>,
    /// Append a book id to the author's book list
    pub push_book: Option<Uuid>,
}

/// Persistent collection of authors
#[async_trait]
pub trait AuthorsRepository: Send + Sync {
    /// Insert a new author; `name` must be non-empty and unique
    async fn insert(&self, author: CreateAuthor) -> Result<AuthorRecord, StoreError>;

    /// Get an author by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, StoreError>;

    /// Get an author by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<AuthorRecord>, StoreError>;

    /// All authors in creation order
    async fn list_all(&self) -> Result<Vec<AuthorRecord>, StoreError>;

    /// Apply a partial update, returning the updated record or `None` for
    /// an unknown id
    async fn update(
        &self,
        id: Uuid,
        patch: UpdateAuthor,
    ) -> Result<Option<AuthorRecord>, StoreError>;

    /// Number of authors
    async fn count(&self) -> Result<u64, StoreError>;
}
