//! GraphQL type definitions
//!
//! Thin wrappers over store records, decorated with async-graphql resolvers.
//! Relational fields (Book.author, Author.books) resolve against the store
//! unless the parent was constructed with the relation preloaded, so a
//! returned Book never carries a partially populated Author.

use async_graphql::{Context, ID, Object, Result, SimpleObject};

use crate::graphql::errors;
use crate::store::{AuthorRecord, BookRecord, Store, UserRecord};

/// A book in the catalog
#[derive(Debug, Clone)]
pub struct Book {
    record: BookRecord,
    author: Option<AuthorRecord>,
}

impl Book {
    pub fn new(record: BookRecord) -> Self {
        Self {
            record,
            author: None,
        }
    }

    /// Construct with the author relation already resolved
    pub fn with_author(record: BookRecord, author: AuthorRecord) -> Self {
        Self {
            record,
            author: Some(author),
        }
    }
}

#[Object]
impl Book {
    async fn id(&self) -> ID {
        ID(self.record.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.record.title
    }

    async fn published(&self) -> i32 {
        self.record.published
    }

    async fn genres(&self) -> &[String] {
        &self.record.genres
    }

    /// The author of this book
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        if let Some(author) = &self.author {
            return Ok(Author::new(author.clone()));
        }

        let store = ctx.data_unchecked::<Store>();
        let author = store
            .authors()
            .find_by_id(self.record.author_id)
            .await
            .map_err(errors::internal)?
            .ok_or_else(|| {
                errors::internal(format!(
                    "book {} references missing author {}",
                    self.record.id, self.record.author_id
                ))
            })?;
        Ok(Author::new(author))
    }
}

/// An author referenced by catalog books
#[derive(Debug, Clone)]
pub struct Author {
    record: AuthorRecord,
}

impl Author {
    pub fn new(record: AuthorRecord) -> Self {
        Self { record }
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.record.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.record.name
    }

    async fn born(&self) -> Option<i32> {
        self.record.born
    }

    /// Number of books this author has in the catalog
    ///
    /// Read from the book id cache that every book-creating mutation
    /// maintains, never recounted from the books collection.
    async fn book_count(&self) -> i32 {
        self.record.books.len() as i32
    }

    /// This author's books, in creation order
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let store = ctx.data_unchecked::<Store>();
        let mut books = Vec::with_capacity(self.record.books.len());
        for book_id in &self.record.books {
            let record = store
                .books()
                .find_by_id(*book_id)
                .await
                .map_err(errors::internal)?
                .ok_or_else(|| {
                    errors::internal(format!(
                        "author {} caches missing book {}",
                        self.record.id, book_id
                    ))
                })?;
            books.push(Book::with_author(record, self.record.clone()));
        }
        Ok(books)
    }
}

/// A registered account
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub favorite_genre: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            username: record.username,
            favorite_genre: record.favorite_genre,
        }
    }
}

/// A signed access token
#[derive(Debug, Clone, SimpleObject)]
pub struct Token {
    pub value: String,
}
