//! Order aggregate and its factory.

use chrono::{DateTime, Utc};
use common::UserId;
use serde::{Deserialize, Serialize};

use crate::error::PricingError;

use super::{
    DeliveryInfo, OrderItem, OrderNumber, OrderNumberGenerator, OrderStatus, Pricing,
    TimestampOrderNumberGenerator,
};

/// Order aggregate root.
///
/// Built once by [`OrderFactory`] and not mutated afterwards. Pricing is
/// derived from the items at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_number: OrderNumber,
    user_id: UserId,
    merchant_id: String,
    status: OrderStatus,
    items: Vec<OrderItem>,
    delivery: DeliveryInfo,
    remark: String,
    pricing: Pricing,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order number.
    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Returns the customer who placed the order.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the merchant the order was placed with.
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the items in the order they were requested.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn delivery(&self) -> &DeliveryInfo {
        &self.delivery
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Builds new orders.
///
/// Inputs are expected to be validated already. The factory assigns the
/// order number, prices the items and stamps the creation time; it never
/// touches storage.
#[derive(Debug, Clone, Default)]
pub struct OrderFactory<G = TimestampOrderNumberGenerator> {
    numbers: G,
}

impl OrderFactory<TimestampOrderNumberGenerator> {
    /// Creates a factory using timestamp-based order numbers.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: OrderNumberGenerator> OrderFactory<G> {
    /// Creates a factory with a custom order number generator.
    pub fn with_generator(numbers: G) -> Self {
        Self { numbers }
    }

    /// Creates a new order placed now.
    ///
    /// Fails only if the amounts are too large to price.
    pub fn create_order(
        &self,
        user_id: UserId,
        merchant_id: impl Into<String>,
        items: Vec<OrderItem>,
        delivery: DeliveryInfo,
        remark: impl Into<String>,
    ) -> Result<Order, PricingError> {
        self.create_order_at(Utc::now(), user_id, merchant_id, items, delivery, remark)
    }

    /// Creates a new order placed at `now`.
    pub fn create_order_at(
        &self,
        now: DateTime<Utc>,
        user_id: UserId,
        merchant_id: impl Into<String>,
        items: Vec<OrderItem>,
        delivery: DeliveryInfo,
        remark: impl Into<String>,
    ) -> Result<Order, PricingError> {
        let pricing = Pricing::for_items(&items)?;

        Ok(Order {
            order_number: self.numbers.generate(now),
            user_id,
            merchant_id: merchant_id.into(),
            status: OrderStatus::PendingPayment,
            items,
            delivery,
            remark: remark.into(),
            pricing,
            created_at: now,
            updated_at: now,
        })
    }
}
