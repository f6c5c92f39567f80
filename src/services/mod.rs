//! Domain services behind the GraphQL layer

pub mod auth;
pub mod events;

pub use auth::{AuthConfig, AuthService, LoginError, TokenClaims};
pub use events::{BroadcastBus, CatalogEvent, EventBus, EventBusConfig};
