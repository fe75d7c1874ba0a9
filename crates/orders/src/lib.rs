//! Order intake for the product catalog.
//!
//! Placing an order announces an [`OrderCreated`] notification on an
//! outbound channel through an [`EventPublisher`]. Delivery is best effort:
//! a failed publish is logged and counted, and the order is still accepted.

pub mod error;
pub mod events;
pub mod publisher;
pub mod service;

pub use error::PublishError;
pub use events::OrderCreated;
pub use publisher::{EventPublisher, InMemoryEventChannel};
pub use service::{DEFAULT_ORDER_CHANNEL, OrderIntakeService};
