//! Order status.

use serde::{Deserialize, Serialize};

/// The payment status of an order.
///
/// Orders are always created as [`OrderStatus::PendingPayment`]; the other
/// states are set by payment and cancellation flows outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been placed and awaits payment.
    #[default]
    PendingPayment,

    /// Payment has been received.
    Paid,

    /// Order was cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns the status name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "PENDING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_pending_payment() {
        assert_eq!(OrderStatus::default(), OrderStatus::PendingPayment);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::PendingPayment.to_string(), "PENDING_PAYMENT");
        assert_eq!(OrderStatus::Paid.to_string(), "PAID");
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_serialization_matches_display() {
        for status in [
            OrderStatus::PendingPayment,
            OrderStatus::Paid,
            OrderStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let deserialized: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, deserialized);
        }
    }
}
