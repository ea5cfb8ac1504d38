//! # order-desk
//!
//! An order management service: a sortable, paginated listing of customer
//! orders with create and delete operations, backed by an in-memory store and
//! exposed as a JSON REST API.
//!
//! ## Endpoints
//!
//! - `GET /orders?page=&perPage=&sortField=&sortOrder=`: one page of orders,
//!   plus a `Link` header pointing at the first, last, previous and next pages
//! - `POST /orders`: validate and create an order (`201`, or `422` with every
//!   failing field)
//! - `DELETE /orders/{order_id}`: remove an order (`200`, or `404`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_desk::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_order_service(InMemoryOrderService::with_orders(seed_orders()))
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod observability;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ListParams, ListQuery, NewOrder, Order, OrderCandidate, OrderService, OrderStatus,
        PagedResult, SortField, SortOrder, ValidatedOrder,
    };

    // === Errors ===
    pub use crate::core::{
        ConfigError, FieldErrors, FieldValidationError, OrderError, RequestError, StorageError,
        ValidationError,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryOrderService, seed_orders};

    // === Config ===
    pub use crate::config::{AppConfig, HttpConfig, LoggingConfig, PaginationConfig};

    // === Server ===
    pub use crate::server::{ServerBuilder, ServerHost, exposure::RestExposure};
}
