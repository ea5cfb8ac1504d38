//! In-memory implementation of OrderService

use crate::core::error::{OrderError, Result, StorageError};
use crate::core::{Order, OrderService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory order service
///
/// Orders live in a deque with the newest at the front. Cloning the service
/// shares the same collection. Uses RwLock for thread-safe access; concurrent
/// writers are serialized by the lock but may land in either order.
#[derive(Clone, Default)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<VecDeque<Order>>>,
}

impl InMemoryOrderService {
    /// Create an empty in-memory order service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service holding `orders`, first element treated as newest
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(orders.into())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, VecDeque<Order>>> {
        self.orders.read().map_err(|e| {
            OrderError::from(StorageError::LockPoisoned {
                mode: "read",
                message: e.to_string(),
            })
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, VecDeque<Order>>> {
        self.orders.write().map_err(|e| {
            OrderError::from(StorageError::LockPoisoned {
                mode: "write",
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn create(&self, order: Order) -> Result<Order> {
        let mut orders = self.write()?;
        orders.push_front(order.clone());
        Ok(order)
    }

    async fn get(&self, id: &str) -> Result<Option<Order>> {
        let orders = self.read()?;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let orders = self.read()?;
        Ok(orders.iter().cloned().collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    async fn delete(&self, id: &str) -> Result<String> {
        let mut orders = self.write()?;
        let position = orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| OrderError::NotFound { id: id.to_string() })?;

        orders
            .remove(position)
            .map(|removed| removed.id)
            .ok_or_else(|| OrderError::Internal(format!("order index {position} vanished")))
    }
}
