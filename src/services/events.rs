//! Catalog event bus
//!
//! Fan-out channel for domain events, decoupling mutation handlers from the
//! subscription resolvers that forward events to clients. Subscribers only
//! see events published after they attach; nothing is replayed. A subscriber
//! that falls more than the channel capacity behind skips the missed events
//! rather than stalling publishers or being disconnected.

use futures::stream::BoxStream;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::store::{AuthorRecord, BookRecord};

/// Events emitted by catalog mutations
#[derive(Debug, Clone)]
pub enum CatalogEvent {
    BookAdded {
        book: BookRecord,
        author: AuthorRecord,
    },
}

/// Publish/subscribe seam for catalog events
///
/// The in-process implementation below covers a single instance; a broker
/// backed implementation can replace it behind the same trait.
pub trait EventBus: Send + Sync {
    fn publish(&self, event: CatalogEvent);
    fn subscribe(&self) -> BoxStream<'static, CatalogEvent>;
}

#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Events buffered per subscriber before the oldest are dropped
    pub channel_capacity: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Event bus backed by a tokio broadcast channel
pub struct BroadcastBus {
    event_tx: broadcast::Sender<CatalogEvent>,
}

impl BroadcastBus {
    pub fn new(config: EventBusConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.channel_capacity);
        Self { event_tx }
    }

    pub fn with_defaults() -> Self {
        Self::new(EventBusConfig::default())
    }
}

impl EventBus for BroadcastBus {
    fn publish(&self, event: CatalogEvent) {
        // send only fails when nobody is listening, which is fine
        let delivered = self.event_tx.send(event).unwrap_or(0);
        tracing::debug!(subscribers = delivered, "Published catalog event");
    }

    fn subscribe(&self) -> BoxStream<'static, CatalogEvent> {
        let rx = self.event_tx.subscribe();
        Box::pin(BroadcastStream::new(rx).filter_map(|result| match result {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Subscriber lagged, dropping missed events");
                None
            }
        }))
    }
}
