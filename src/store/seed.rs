//! Demo catalog seeding
//!
//! Loads a small set of well-known software books so a fresh instance has
//! something to query. Seeding is skipped when the store already holds
//! authors, so restarting against a persistent backend never duplicates data.

use anyhow::Context;

use super::Store;
use super::authors::{CreateAuthor, UpdateAuthor};
use super::books::CreateBook;

const AUTHORS: &[(&str, Option<i32>)] = &[
    ("Robert Martin", Some(1952)),
    ("Martin Fowler", Some(1963)),
    ("Fyodor Dostoevsky", Some(1821)),
    ("Joshua Kerievsky", None),
    ("Sandi Metz", None),
];

const BOOKS: &[(&str, i32, &str, &[&str])] = &[
    ("Clean Code", 2008, "Robert Martin", &["refactoring"]),
    (
        "Agile software development",
        2002,
        "Robert Martin",
        &["agile", "patterns", "design"],
    ),
    (
        "Refactoring, edition 2",
        2018,
        "Martin Fowler",
        &["refactoring"],
    ),
    (
        "Refactoring to patterns",
        2008,
        "Joshua Kerievsky",
        &["refactoring", "patterns"],
    ),
    (
        "Practical Object-Oriented Design, An Agile Primer Using Ruby",
        2012,
        "Sandi Metz",
        &["refactoring", "design"],
    ),
    (
        "Crime and punishment",
        1866,
        "Fyodor Dostoevsky",
        &["classic", "crime"],
    ),
    (
        "The Demon",
        1872,
        "Fyodor Dostoevsky",
        &["classic", "revolution"],
    ),
];

/// How many records a seeding pass actually created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub authors: usize,
    pub books: usize,
}

/// Populate an empty store with the demo catalog
pub async fn seed_catalog(store: &Store) -> anyhow::Result<SeedSummary> {
    if store.authors().count().await? > 0 {
        tracing::debug!("Store already populated, skipping seed");
        return Ok(SeedSummary { authors: 0, books: 0 });
    }

    for (name, born) in AUTHORS {
        store
            .authors()
            .insert(CreateAuthor {
                name: (*name).to_string(),
                born: *born,
            })
            .await?;
    }

    for (title, published, author_name, genres) in BOOKS {
        let author = store
            .authors()
            .find_by_name(author_name)
            .await?
            .with_context(|| format!("Unknown seed author: {author_name}"))?;

        let book = store
            .books()
            .insert(CreateBook {
                title: (*title).to_string(),
                author_id: author.id,
                published: *published,
                genres: genres.iter().map(|g| (*g).to_string()).collect(),
            })
            .await?;

        store
            .authors()
            .update(
                author.id,
                UpdateAuthor {
                    push_book: Some(book.id),
                    ..Default::default()
                },
            )
            .await?
            .with_context(|| format!("Seed author disappeared: {author_name}"))?;
    }

    let summary = SeedSummary {
        authors: AUTHORS.len(),
        books: BOOKS.len(),
    };
    tracing::info!(
        authors = summary.authors,
        books = summary.books,
        "Seeded demo catalog"
    );
    Ok(summary)
}
