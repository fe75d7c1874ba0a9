//! Integration tests for order intake against custom publishers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use orders::{
    DEFAULT_ORDER_CHANNEL, EventPublisher, InMemoryEventChannel, OrderCreated, OrderIntakeService,
    PublishError,
};

/// Publisher that rejects the first `failures` calls, then accepts.
#[derive(Clone, Default)]
struct FlakyPublisher {
    failures: usize,
    calls: Arc<AtomicUsize>,
    delivered: InMemoryEventChannel,
}

#[async_trait]
impl EventPublisher for FlakyPublisher {
    async fn publish(&self, channel: &str, event: &OrderCreated) -> Result<(), PublishError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(PublishError::ChannelUnavailable {
                channel: channel.to_string(),
                reason: "connection reset".to_string(),
            });
        }
        self.delivered.publish(channel, event).await
    }
}

#[tokio::test]
async fn failed_publish_is_not_retried() {
    let publisher = FlakyPublisher {
        failures: 1,
        ..Default::default()
    };
    let service = OrderIntakeService::new(publisher.clone());

    assert_eq!(service.place_order("first".to_string()).await, "first");
    assert_eq!(service.place_order("second".to_string()).await, "second");

    assert_eq!(publisher.calls.load(Ordering::SeqCst), 2);
    let delivered = publisher.delivered.messages(DEFAULT_ORDER_CHANNEL).await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0]["productId"], "second");
}

#[tokio::test]
async fn concurrent_orders_are_all_published() {
    let channel = InMemoryEventChannel::new();
    let service = Arc::new(OrderIntakeService::new(channel.clone()));

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.place_order(format!("p-{i}")).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(channel.messages(DEFAULT_ORDER_CHANNEL).await.len(), 20);
}

#[tokio::test]
async fn publish_payload_decodes_as_notification() {
    let channel = InMemoryEventChannel::new();
    let service = OrderIntakeService::new(channel.clone());

    service.place_order("3f2a".to_string()).await;

    let payload = channel.messages(DEFAULT_ORDER_CHANNEL).await.remove(0);
    let event: OrderCreated = serde_json::from_value(payload).unwrap();
    assert_eq!(event, OrderCreated::new("3f2a"));
}
