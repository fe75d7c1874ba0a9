//! Order intake service.

use crate::events::OrderCreated;
use crate::publisher::EventPublisher;

/// Channel order notifications go to unless configured otherwise.
pub const DEFAULT_ORDER_CHANNEL: &str = "orderCreated-out-0";

/// Accepts orders and announces them on an outbound channel.
///
/// The product id is passed through as given; it is not checked against
/// the catalog.
pub struct OrderIntakeService<P: EventPublisher> {
    publisher: P,
    channel: String,
}

impl<P: EventPublisher> OrderIntakeService<P> {
    /// Creates a service publishing to [`DEFAULT_ORDER_CHANNEL`].
    pub fn new(publisher: P) -> Self {
        Self::with_channel(publisher, DEFAULT_ORDER_CHANNEL)
    }

    /// Creates a service publishing to the given channel.
    pub fn with_channel(publisher: P, channel: impl Into<String>) -> Self {
        Self {
            publisher,
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Places an order for a product and returns the product id.
    ///
    /// Never fails: a rejected notification is logged and counted, and the
    /// caller still gets its product id back.
    #[tracing::instrument(skip(self), fields(channel = %self.channel))]
    pub async fn place_order(&self, product_id: String) -> String {
        let event = OrderCreated::new(product_id.clone());

        match self.publisher.publish(&self.channel, &event).await {
            Ok(()) => {
                metrics::counter!("orders_notifications_published_total").increment(1);
                tracing::info!(%product_id, event_type = event.event_type(), "order notification published");
            }
            Err(e) => {
                metrics::counter!("orders_notifications_failed_total").increment(1);
                tracing::error!(%product_id, error = %e, "failed to publish order notification");
            }
        }

        product_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::InMemoryEventChannel;

    #[tokio::test]
    async fn test_place_order_publishes_to_default_channel() {
        let channel = InMemoryEventChannel::new();
        let service = OrderIntakeService::new(channel.clone());

        let returned = service.place_order("p-42".to_string()).await;

        assert_eq!(returned, "p-42");
        let messages = channel.messages(DEFAULT_ORDER_CHANNEL).await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["productId"], "p-42");
    }

    #[tokio::test]
    async fn test_place_order_survives_publish_failure() {
        let channel = InMemoryEventChannel::new();
        channel.set_fail_on_publish(true).await;
        let service = OrderIntakeService::new(channel.clone());

        let returned = service.place_order("p-42".to_string()).await;

        assert_eq!(returned, "p-42");
        assert_eq!(channel.message_count().await, 0);
    }

    #[tokio::test]
    async fn test_custom_channel() {
        let channel = InMemoryEventChannel::new();
        let service = OrderIntakeService::with_channel(channel.clone(), "orders.v2");

        service.place_order("p-1".to_string()).await;

        assert_eq!(service.channel(), "orders.v2");
        assert_eq!(channel.messages("orders.v2").await.len(), 1);
        assert!(channel.messages(DEFAULT_ORDER_CHANNEL).await.is_empty());
    }
}
