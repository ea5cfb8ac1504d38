//! Order entity and its closed status enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every accepted status, in workflow order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of [`OrderStatus::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A customer order as stored and served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub status: OrderStatus,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub total_gross: f64,
}

/// A validated creation payload, not yet assigned an id
///
/// Only obtainable through [`crate::core::validation::OrderCandidate::into_new_order`],
/// so every `NewOrder` satisfies the order invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub(crate) order_number: String,
    pub(crate) customer: String,
    pub(crate) status: OrderStatus,
    pub(crate) due_date: String,
    pub(crate) total_gross: f64,
}

impl NewOrder {
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

impl Order {
    /// Admit a validated payload with a freshly generated id
    pub fn create(new: NewOrder) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), new)
    }

    /// Admit a validated payload under a caller-chosen id
    pub fn with_id(id: impl Into<String>, new: NewOrder) -> Self {
        Self {
            id: id.into(),
            order_number: new.order_number,
            customer: new.customer,
            status: new.status,
            due_date: new.due_date,
            total_gross: new.total_gross,
        }
    }
}
