//! GraphQL schema assembly
//!
//! Query and mutation roots are merged from the per-domain resolver structs
//! under `queries/` and `mutations/`. Collaborators (store, auth service,
//! event bus) are attached as schema data so resolvers reach them through
//! the request context.

use std::sync::Arc;

use async_graphql::{MergedObject, Schema};

use crate::services::{AuthService, EventBus};
use crate::store::Store;

use super::mutations::{AuthMutations, AuthorMutations, BookMutations};
use super::queries::{AuthorQueries, BookQueries, UserQueries};
use super::subscriptions::SubscriptionRoot;

/// The GraphQL schema type
pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(BookQueries, AuthorQueries, UserQueries);

#[derive(MergedObject, Default)]
pub struct MutationRoot(BookMutations, AuthorMutations, AuthMutations);

/// Build the GraphQL schema with its collaborators attached
pub fn build_schema(store: Store, auth: AuthService, events: Arc<dyn EventBus>) -> BookshelfSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), SubscriptionRoot)
        .data(store)
        .data(auth)
        .data(events)
        .finish()
}
