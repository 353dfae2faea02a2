//! Domain error types.

use thiserror::Error;

use crate::order::OrderNumber;

/// Errors reported by an order repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An order with this number is already stored.
    #[error("Order number {0} already exists")]
    Conflict(OrderNumber),

    /// No order is stored under this number.
    #[error("Order {0} not found")]
    NotFound(OrderNumber),
}

/// Errors raised while pricing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// `quantity * unit_price` of the item at `index` is out of range.
    #[error("Subtotal of item {index} is out of range")]
    SubtotalOverflow { index: usize },

    /// The sum of subtotals and fees is out of range.
    #[error("Order total is out of range")]
    TotalOverflow,
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
