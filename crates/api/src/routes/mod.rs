//! HTTP route handlers and the state they share.

pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;

use catalog::{CatalogService, InMemoryProductRepository};
use ::orders::{InMemoryEventChannel, OrderIntakeService};

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub catalog: CatalogService<InMemoryProductRepository>,
    pub orders: OrderIntakeService<InMemoryEventChannel>,
}
