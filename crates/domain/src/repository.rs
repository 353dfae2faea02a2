//! Persistence port for orders.

use async_trait::async_trait;

use crate::error::Result;
use crate::order::{Order, OrderNumber};

/// Store of orders keyed by order number.
///
/// Implementations must make the existence check and the insert in
/// [`OrderRepository::create`] a single atomic step, so that two concurrent
/// creates with the same number cannot both succeed. All implementations
/// must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores a new order.
    ///
    /// Fails with `RepositoryError::Conflict` if an order with the same number
    /// exists; the stored order is left untouched in that case.
    async fn create(&self, order: Order) -> Result<()>;

    /// Retrieves an order by exact order number.
    ///
    /// Fails with `RepositoryError::NotFound` if no such order exists.
    async fn find_by_order_number(&self, order_number: &OrderNumber) -> Result<Order>;
}
