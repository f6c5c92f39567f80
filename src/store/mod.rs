//! Entity store for the catalog collections
//!
//! Each collection is reached through a repository trait so the backing
//! engine stays swappable; the in-memory backend in [`memory`] serves
//! single-instance deployments and doubles as the fake store for tests.

pub mod authors;
pub mod books;
pub mod memory;
pub mod seed;
pub mod users;

use std::sync::Arc;

use thiserror::Error;

pub use authors::{AuthorRecord, AuthorsRepository, CreateAuthor, UpdateAuthor};
pub use books::{BookFilter, BookRecord, BooksRepository, CreateBook};
pub use memory::MemoryStore;
pub use seed::{SeedSummary, seed_catalog};
pub use users::{CreateUser, MIN_USERNAME_LEN, UserRecord, UsersRepository};

/// Errors surfaced by repository operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated
    #[error("duplicate value for {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    /// A field failed schema validation
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The backing engine failed
    #[error("store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// True for constraint violations caused by caller input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::Duplicate { .. } | StoreError::Invalid { .. }
        )
    }
}

/// Handle bundling the catalog collections; cheap to clone
#[derive(Clone)]
pub struct Store {
    authors: Arc<dyn AuthorsRepository>,
    books: Arc<dyn BooksRepository>,
    users: Arc<dyn UsersRepository>,
}

impl Store {
    /// Assemble a store from repository implementations
    pub fn new(
        authors: Arc<dyn AuthorsRepository>,
        books: Arc<dyn BooksRepository>,
        users: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            authors,
            books,
            users,
        }
    }

    /// Store backed by shared in-memory collections
    pub fn in_memory() -> Self {
        let backend = Arc::new(MemoryStore::new());
        Self::new(backend.clone(), backend.clone(), backend)
    }

    /// The authors collection
    pub fn authors(&self) -> &dyn AuthorsRepository {
        self.authors.as_ref()
    }

    /// The books collection
    pub fn books(&self) -> &dyn BooksRepository {
        self.books.as_ref()
    }

    /// The users collection
    pub fn users(&self) -> &dyn UsersRepository {
        self.users.as_ref()
    }
}
