//! Books collection: records and repository contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    /// Reference to the owning author, never an embedded copy
    pub author_id: Uuid,
    pub published: i32,
    /// Distinct genre strings in the order they were supplied
    pub genres: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub author_id: Uuid,
    pub published: i32,
    pub genres: Vec<String>,
}

/// Filter for listing books; set fields are intersected
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub author_id: Option<Uuid>,
    pub genre: Option<String>,
}

/// Persistent collection of books
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// Insert a new book; `title` must be non-empty and unique
    async fn insert(&self, book: CreateBook) -> Result<BookRecord, StoreError>;

    /// Get a book by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, StoreError>;

    /// Books matching `filter`, in creation order
    async fn list(&self, filter: BookFilter) -> Result<Vec<BookRecord>, StoreError>;

    /// Distinct genre strings across all books, sorted
    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError>;

    /// Number of books
    async fn count(&self) -> Result<u64, StoreError>;
}
