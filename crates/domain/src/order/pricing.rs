//! Order pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Money, OrderItem};
use crate::error::PricingError;

/// Packaging fee charged on every order (1.00).
pub const PACKAGING_FEE: Money = Money::new(Decimal::from_parts(100, 0, 0, false, 2));

/// Delivery fee charged on every order (3.00).
pub const DELIVERY_FEE: Money = Money::new(Decimal::from_parts(300, 0, 0, false, 2));

/// Price breakdown of an order.
///
/// Only constructible from a list of items, so `final_amount` always equals
/// `items_total + packaging_fee + delivery_fee` and `items_total` is the sum
/// of `item_subtotals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    item_subtotals: Vec<Money>,
    items_total: Money,
    packaging_fee: Money,
    delivery_fee: Money,
    final_amount: Money,
}

impl Pricing {
    /// Prices a list of items with the fixed packaging and delivery fees.
    ///
    /// Fails if a subtotal or a running total leaves the decimal range.
    pub fn for_items(items: &[OrderItem]) -> Result<Self, PricingError> {
        let mut item_subtotals = Vec::with_capacity(items.len());
        let mut items_total = Money::zero();

        for (index, item) in items.iter().enumerate() {
            let subtotal = item
                .subtotal()
                .ok_or(PricingError::SubtotalOverflow { index })?;
            items_total = items_total
                .checked_add(subtotal)
                .ok_or(PricingError::TotalOverflow)?;
            item_subtotals.push(subtotal);
        }

        let final_amount = items_total
            .checked_add(PACKAGING_FEE)
            .and_then(|amount| amount.checked_add(DELIVERY_FEE))
            .ok_or(PricingError::TotalOverflow)?;

        Ok(Self {
            item_subtotals,
            items_total,
            packaging_fee: PACKAGING_FEE,
            delivery_fee: DELIVERY_FEE,
            final_amount,
        })
    }

    /// Returns `quantity * unit_price` of each item, in item order.
    pub fn item_subtotals(&self) -> &[Money] {
        &self.item_subtotals
    }

    pub fn items_total(&self) -> Money {
        self.items_total
    }

    pub fn packaging_fee(&self) -> Money {
        self.packaging_fee
    }

    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    pub fn final_amount(&self) -> Money {
        self.final_amount
    }
}
