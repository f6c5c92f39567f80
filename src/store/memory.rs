//! In-memory store backend
//!
//! Collections are plain vectors behind `RwLock`s, kept in insertion order.
//! Unique constraints and field checks are enforced here, mirroring what a
//! document database would do with a schema. A real database client can
//! replace this backend by implementing the same repository traits.

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::StoreError;
use super::authors::{AuthorRecord, AuthorsRepository, CreateAuthor, UpdateAuthor};
use super::books::{BookFilter, BookRecord, BooksRepository, CreateBook};
use super::users::{CreateUser, MIN_USERNAME_LEN, UserRecord, UsersRepository};

/// Shared in-memory collections for authors, books, and users
#[derive(Default)]
pub struct MemoryStore {
    authors: RwLock<Vec<AuthorRecord>>,
    books: RwLock<Vec<BookRecord>>,
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorsRepository for MemoryStore {
    async fn insert(&self, author: CreateAuthor) -> Result<AuthorRecord, StoreError> {
        if author.name.is_empty() {
            return Err(StoreError::Invalid {
                field: "name",
                reason: "must not be empty".into(),
            });
        }

        let mut authors = self.authors.write();
        if authors.iter().any(|a| a.name == author.name) {
            return Err(StoreError::Duplicate {
                field: "name",
                value: author.name,
            });
        }

        let record = AuthorRecord {
            id: Uuid::new_v4(),
            name: author.name,
            born: author.born,
            books: Vec::new(),
        };
        authors.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, StoreError> {
        Ok(self.authors.read().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AuthorRecord>, StoreError> {
        Ok(self.authors.read().iter().find(|a| a.name == name).cloned())
    }

    async fn list_all(&self) -> Result<Vec<AuthorRecord>, StoreError> {
        Ok(self.authors.read().clone())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: UpdateAuthor,
    ) -> Result<Option<AuthorRecord>, StoreError> {
        let mut authors = self.authors.write();
        let Some(author) = authors.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(born) = patch.born {
            author.born = Some(born);
        }
        if let Some(book_id) = patch.push_book {
            author.books.push(book_id);
        }
        Ok(Some(author.clone()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.authors.read().len() as u64)
    }
}

#[async_trait]
impl BooksRepository for MemoryStore {
    async fn insert(&self, book: CreateBook) -> Result<BookRecord, StoreError> {
        if book.title.is_empty() {
            return Err(StoreError::Invalid {
                field: "title",
                reason: "must not be empty".into(),
            });
        }

        // collapse duplicate genres, keeping first-occurrence order
        let mut genres: Vec<String> = Vec::with_capacity(book.genres.len());
        for genre in book.genres {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }

        let mut books = self.books.write();
        if books.iter().any(|b| b.title == book.title) {
            return Err(StoreError::Duplicate {
                field: "title",
                value: book.title,
            });
        }

        let record = BookRecord {
            id: Uuid::new_v4(),
            title: book.title,
            author_id: book.author_id,
            published: book.published,
            genres,
        };
        books.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookRecord>, StoreError> {
        Ok(self.books.read().iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self, filter: BookFilter) -> Result<Vec<BookRecord>, StoreError> {
        Ok(self
            .books
            .read()
            .iter()
            .filter(|b| filter.author_id.is_none_or(|id| b.author_id == id))
            .filter(|b| {
                filter
                    .genre
                    .as_ref()
                    .is_none_or(|genre| b.genres.contains(genre))
            })
            .cloned()
            .collect())
    }

    async fn distinct_genres(&self) -> Result<Vec<String>, StoreError> {
        let mut genres: Vec<String> = self
            .books
            .read()
            .iter()
            .flat_map(|b| b.genres.iter().cloned())
            .collect();
        genres.sort();
        genres.dedup();
        Ok(genres)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.books.read().len() as u64)
    }
}

#[async_trait]
impl UsersRepository for MemoryStore {
    async fn insert(&self, user: CreateUser) -> Result<UserRecord, StoreError> {
        if user.username.chars().count() < MIN_USERNAME_LEN {
            return Err(StoreError::Invalid {
                field: "username",
                reason: format!("must be at least {MIN_USERNAME_LEN} characters"),
            });
        }
        if user.favorite_genre.is_empty() {
            return Err(StoreError::Invalid {
                field: "favoriteGenre",
                reason: "must not be empty".into(),
            });
        }

        let mut users = self.users.write();
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate {
                field: "username",
                value: user.username,
            });
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            username: user.username,
            favorite_genre: user.favorite_genre,
            password_hash: user.password_hash,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn author(name: &str) -> CreateAuthor {
        CreateAuthor {
            name: name.to_string(),
            born: None,
        }
    }

    fn book(title: &str, author_id: Uuid, genres: &[&str]) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author_id,
            published: 2000,
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn user(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            favorite_genre: "classic".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn author_insert_rejects_duplicate_name() {
        let store = MemoryStore::new();
        AuthorsRepository::insert(&store, author("Sandi Metz"))
            .await
            .unwrap();

        let err = AuthorsRepository::insert(&store, author("Sandi Metz"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Duplicate { field: "name", .. });
        assert!(err.is_validation());
        assert_eq!(AuthorsRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn author_update_sets_born_and_appends_books() {
        let store = MemoryStore::new();
        let created = AuthorsRepository::insert(&store, author("Martin Fowler"))
            .await
            .unwrap();
        assert!(created.books.is_empty());

        let first_book = Uuid::new_v4();
        let updated = store
            .update(
                created.id,
                UpdateAuthor {
                    born: Some(1963),
                    push_book: Some(first_book),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.born, Some(1963));
        assert_eq!(updated.books, vec![first_book]);

        let second_book = Uuid::new_v4();
        let updated = store
            .update(
                created.id,
                UpdateAuthor {
                    push_book: Some(second_book),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        // untouched fields survive partial updates
        assert_eq!(updated.born, Some(1963));
        assert_eq!(updated.books, vec![first_book, second_book]);
    }

    #[tokio::test]
    async fn author_update_unknown_id_returns_none() {
        let store = MemoryStore::new();
        let result = store
            .update(Uuid::new_v4(), UpdateAuthor::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn book_insert_rejects_duplicate_title() {
        let store = MemoryStore::new();
        let author_id = Uuid::new_v4();
        BooksRepository::insert(&store, book("Clean Code", author_id, &["refactoring"]))
            .await
            .unwrap();

        let err = BooksRepository::insert(&store, book("Clean Code", author_id, &[]))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Duplicate { field: "title", .. });
        assert_eq!(BooksRepository::count(&store).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn book_insert_collapses_duplicate_genres() {
        let store = MemoryStore::new();
        let record = BooksRepository::insert(
            &store,
            book("Refactoring", Uuid::new_v4(), &["agile", "design", "agile"]),
        )
        .await
        .unwrap();
        assert_eq!(record.genres, vec!["agile", "design"]);
    }

    #[tokio::test]
    async fn book_list_intersects_author_and_genre_filters() {
        let store = MemoryStore::new();
        let martin = Uuid::new_v4();
        let fowler = Uuid::new_v4();
        BooksRepository::insert(&store, book("Clean Code", martin, &["refactoring"]))
            .await
            .unwrap();
        BooksRepository::insert(&store, book("Agile software development", martin, &["agile"]))
            .await
            .unwrap();
        BooksRepository::insert(&store, book("Refactoring, edition 2", fowler, &["refactoring"]))
            .await
            .unwrap();

        let by_author = store
            .list(BookFilter {
                author_id: Some(martin),
                genre: None,
            })
            .await
            .unwrap();
        assert_eq!(by_author.len(), 2);

        let by_genre = store
            .list(BookFilter {
                author_id: None,
                genre: Some("refactoring".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(by_genre.len(), 2);

        let both = store
            .list(BookFilter {
                author_id: Some(martin),
                genre: Some("refactoring".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "Clean Code");

        let all = store.list(BookFilter::default()).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn distinct_genres_are_deduplicated_and_sorted() {
        let store = MemoryStore::new();
        let author_id = Uuid::new_v4();
        BooksRepository::insert(&store, book("A", author_id, &["patterns", "design"]))
            .await
            .unwrap();
        BooksRepository::insert(&store, book("B", author_id, &["design", "agile"]))
            .await
            .unwrap();

        let genres = store.distinct_genres().await.unwrap();
        assert_eq!(genres, vec!["agile", "design", "patterns"]);
    }

    #[tokio::test]
    async fn user_insert_enforces_username_rules() {
        let store = MemoryStore::new();

        let err = UsersRepository::insert(&store, user("bob"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Invalid { field: "username", .. });

        UsersRepository::insert(&store, user("booklover"))
            .await
            .unwrap();
        let err = UsersRepository::insert(&store, user("booklover"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Duplicate { field: "username", .. });

        // rejected inserts must leave no record behind
        assert!(store.find_by_username("bob").await.unwrap().is_none());
        assert!(store.find_by_username("booklover").await.unwrap().is_some());
    }
}
