//! Outbound order notifications.

use serde::{Deserialize, Serialize};

/// Announces that an order was placed for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub product_id: String,
}

impl OrderCreated {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }

    /// Returns the event type name used in logs.
    pub fn event_type(&self) -> &'static str {
        "OrderCreated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let event = OrderCreated::new("p-1");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"productId":"p-1"}"#);
    }

    #[test]
    fn test_deserialize() {
        let event: OrderCreated = serde_json::from_str(r#"{"productId":"abc"}"#).unwrap();
        assert_eq!(event, OrderCreated::new("abc"));
    }
}
