//! Service trait for order storage

use crate::core::error::Result;
use crate::core::order::Order;
use async_trait::async_trait;

/// Storage contract for orders
///
/// Implementations own every order exclusively. The collection keeps
/// insertion order with the most recently created order first.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Insert a new order at the front of the collection
    async fn create(&self, order: Order) -> Result<Order>;

    /// Find an order by id
    async fn get(&self, id: &str) -> Result<Option<Order>>;

    /// Snapshot of every order, newest first
    async fn list(&self) -> Result<Vec<Order>>;

    /// Number of stored orders
    async fn count(&self) -> Result<usize>;

    /// Remove exactly one order and return its id
    ///
    /// Fails with [`crate::core::error::OrderError::NotFound`] when no order
    /// has that id.
    async fn delete(&self, id: &str) -> Result<String>;
}
