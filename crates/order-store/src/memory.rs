use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_trait::async_trait;
use domain::error::Result;
use domain::{Order, OrderNumber, OrderRepository, RepositoryError};
use tokio::sync::RwLock;

/// In-memory order repository.
///
/// Orders live in a map keyed by order number behind a single lock. The
/// write lock is held only while checking for and inserting the number, so
/// concurrent creates of the same number are serialized and exactly one wins.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderNumber, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> Result<()> {
        let mut store = self.orders.write().await;

        match store.entry(order.order_number().clone()) {
            Entry::Occupied(existing) => {
                tracing::debug!(order_number = %existing.key(), "order number already taken");
                Err(RepositoryError::Conflict(existing.key().clone()))
            }
            Entry::Vacant(slot) => {
                slot.insert(order);
                Ok(())
            }
        }
    }

    async fn find_by_order_number(&self, order_number: &OrderNumber) -> Result<Order> {
        let store = self.orders.read().await;
        store
            .get(order_number)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(order_number.clone()))
    }
}
