//! Customer Order Model
//!
//! Storefront orders: created once from the checkout payload, afterwards
//! only the `status` field changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order status
///
/// Closed set: any other status string from a client is rejected with 400.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether an admin may move an order from `self` to `next`.
    ///
    /// Re-applying the current status is always allowed (no-op).
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        if *self == next {
            return true;
        }
        matches!(
            (*self, next),
            (Pending, Approved) | (Pending, Cancelled) | (Approved, Delivered) | (Approved, Cancelled)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line item embedded in an order (snapshot of the product at checkout)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LineItem {
    pub id: i64,
    pub name: String,
    pub price: String,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

/// Stored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// UUID assigned on creation, also the record key in `orders`
    pub id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub address: String,
    pub payment_method: String,
    /// Base64 payment screenshot (UPI payments only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_screenshot: Option<String>,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
    pub products: Vec<LineItem>,
    pub total: f64,
}

/// Create order payload (checkout)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct OrderCreate {
    #[validate(length(min = 1, message = "customerName must not be empty"))]
    pub customer_name: String,
    pub phone_number: String,
    pub address: String,
    pub payment_method: String,
    #[serde(default)]
    pub upi_screenshot: Option<String>,
    /// Defaults to the time the order is stored
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub products: Vec<LineItem>,
    #[validate(range(min = 0.0, message = "total must not be negative"))]
    pub total: f64,
}

/// POST /orders/{id}/status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn pending_moves_forward_or_cancels() {
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(!Pending.can_transition_to(Delivered));
    }

    #[test]
    fn approved_can_be_delivered_or_cancelled() {
        assert!(Approved.can_transition_to(Delivered));
        assert!(Approved.can_transition_to(Cancelled));
        assert!(!Approved.can_transition_to(Pending));
    }

    #[test]
    fn terminal_states_only_accept_themselves() {
        for terminal in [Delivered, Cancelled] {
            assert!(terminal.can_transition_to(terminal));
            for next in [Pending, Approved, Delivered, Cancelled] {
                if next != terminal {
                    assert!(!terminal.can_transition_to(next), "{terminal} -> {next}");
                }
            }
        }
    }

    #[test]
    fn status_uses_pascal_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&Approved).unwrap(), "\"Approved\"");
        let update: OrderStatusUpdate = serde_json::from_str(r#"{"status":"Cancelled"}"#).unwrap();
        assert_eq!(update.status, Cancelled);
        assert!(serde_json::from_str::<OrderStatusUpdate>(r#"{"status":"Shipped"}"#).is_err());
    }

    #[test]
    fn create_payload_validates_line_items() {
        let payload: OrderCreate = serde_json::from_value(serde_json::json!({
            "customerName": "Asha",
            "phoneNumber": "98765",
            "address": "12 Lane",
            "paymentMethod": "UPI",
            "products": [{"id": 1, "name": "Mug", "price": "9.99", "quantity": 0}],
            "total": 9.99
        }))
        .unwrap();
        assert!(payload.order_date.is_none());
        assert!(payload.upi_screenshot.is_none());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_payload_rejects_client_status() {
        let result = serde_json::from_value::<OrderCreate>(serde_json::json!({
            "customerName": "Asha",
            "phoneNumber": "98765",
            "address": "12 Lane",
            "paymentMethod": "COD",
            "products": [],
            "total": 0,
            "status": "Approved"
        }));
        assert!(result.is_err());
    }
}
