//! Bookshelf backend library
//!
//! GraphQL service for a small library catalog: books, authors, user
//! accounts, and a live feed of newly added books. The binary in `main.rs`
//! wires these modules to an axum server; integration tests drive the
//! schema directly against the in-memory store.

pub mod config;
pub mod graphql;
pub mod services;
pub mod store;
