//! GraphQL API with subscriptions for real-time updates
//!
//! This module provides the catalog's single API surface using async-graphql:
//! queries and mutations over HTTP, plus the `bookAdded` subscription over
//! WebSocket. Resolvers are grouped by domain under `queries/` and
//! `mutations/` and merged into the roots in `schema.rs`.
//!
//! Catalog mutations require authentication; queries, `createUser`, and
//! `login` are open.

pub mod auth;
pub mod errors;
pub mod mutations;
pub mod queries;
mod schema;
mod subscriptions;
pub mod types;

pub use auth::{AuthUser, verify_token};
pub use schema::{BookshelfSchema, build_schema};
