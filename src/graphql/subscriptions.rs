//! GraphQL subscriptions for real-time updates
//!
//! Subscriptions allow clients to receive push updates over WebSocket.

use std::sync::Arc;

use async_graphql::{Context, Subscription};
use futures::Stream;
use tokio_stream::StreamExt;

use crate::services::{CatalogEvent, EventBus};

use super::types::Book;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Every book added to the catalog from this point on, author populated
    async fn book_added<'ctx>(&self, ctx: &Context<'ctx>) -> impl Stream<Item = Book> + 'ctx {
        let events = ctx.data_unchecked::<Arc<dyn EventBus>>();
        tracing::debug!("Client subscribed to bookAdded");

        events.subscribe().map(|event| match event {
            CatalogEvent::BookAdded { book, author } => Book::with_author(book, author),
        })
    }
}
