//! Event publisher trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::PublishError;
use crate::events::OrderCreated;

/// Trait for sending notifications to a named outbound channel.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes one notification. Returns once the channel accepted it.
    async fn publish(&self, channel: &str, event: &OrderCreated) -> Result<(), PublishError>;
}

#[derive(Debug, Default)]
struct ChannelState {
    messages: HashMap<String, Vec<serde_json::Value>>,
    fail_on_publish: bool,
}

/// In-memory message channel.
///
/// Messages are kept as their JSON payloads, grouped by channel name.
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventChannel {
    state: Arc<RwLock<ChannelState>>,
}

impl InMemoryEventChannel {
    /// Creates a new empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the channel to reject every publish until reset.
    pub async fn set_fail_on_publish(&self, fail: bool) {
        self.state.write().await.fail_on_publish = fail;
    }

    /// Returns the payloads published to `channel`, oldest first.
    pub async fn messages(&self, channel: &str) -> Vec<serde_json::Value> {
        self.state
            .read()
            .await
            .messages
            .get(channel)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the number of messages published across all channels.
    pub async fn message_count(&self) -> usize {
        self.state.read().await.messages.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventChannel {
    async fn publish(&self, channel: &str, event: &OrderCreated) -> Result<(), PublishError> {
        let payload = serde_json::to_value(event)?;
        let mut state = self.state.write().await;

        if state.fail_on_publish {
            return Err(PublishError::ChannelUnavailable {
                channel: channel.to_string(),
                reason: "broker rejected the message".to_string(),
            });
        }

        state
            .messages
            .entry(channel.to_string())
            .or_default()
            .push(payload);
        Ok(())
    }
}
