//! Input and output shapes of the order creation workflow.

use chrono::SecondsFormat;
use domain::{DeliveryInfo, Money, Order, OrderItem};
use rust_decimal::Decimal;

use crate::error::{ApplicationError, Result};

/// Request to place an order, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOrderRequest {
    pub merchant_id: String,
    pub items: Vec<OrderItemRequest>,
    pub delivery_info: DeliveryInfoRequest,
    pub remark: String,
}

/// One dish line in a [`CreateOrderRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItemRequest {
    pub dish_id: String,
    pub dish_name: String,
    pub quantity: i64,
    pub price: Decimal,
}

impl OrderItemRequest {
    pub(crate) fn to_order_item(&self, index: usize) -> Result<OrderItem> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            ApplicationError::validation(
                format!("items[{index}].quantity"),
                "quantity is out of range",
            )
        })?;

        Ok(OrderItem::new(
            self.dish_id.as_str(),
            self.dish_name.as_str(),
            quantity,
            Money::new(self.price),
        ))
    }
}

/// Delivery details in a [`CreateOrderRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryInfoRequest {
    pub recipient_name: String,
    pub recipient_phone: String,
    pub address: String,
}

impl From<&DeliveryInfoRequest> for DeliveryInfo {
    fn from(req: &DeliveryInfoRequest) -> Self {
        DeliveryInfo::new(
            req.recipient_name.as_str(),
            req.recipient_phone.as_str(),
            req.address.as_str(),
        )
    }
}

/// Summary of a newly created order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResult {
    pub order_number: String,
    pub status: String,
    pub pricing: PricingResult,
    /// Creation time in RFC 3339 (`2025-01-01T12:00:00Z`).
    pub created_at: String,
}

/// Order amounts, each with exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingResult {
    pub items_total: String,
    pub packaging_fee: String,
    pub delivery_fee: String,
    pub final_amount: String,
}

impl From<&Order> for OrderResult {
    fn from(order: &Order) -> Self {
        let pricing = order.pricing();

        Self {
            order_number: order.order_number().to_string(),
            status: order.status().to_string(),
            pricing: PricingResult {
                items_total: pricing.items_total().to_fixed_string(),
                packaging_fee: pricing.packaging_fee().to_fixed_string(),
                delivery_fee: pricing.delivery_fee().to_fixed_string(),
                final_amount: pricing.final_amount().to_fixed_string(),
            },
            created_at: order
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
