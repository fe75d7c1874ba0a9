//! Publishing error types.

use thiserror::Error;

/// Errors an event publisher can report.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The channel did not accept the message.
    #[error("Channel '{channel}' unavailable: {reason}")]
    ChannelUnavailable { channel: String, reason: String },

    /// The notification could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
