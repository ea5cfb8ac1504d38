//! Core module containing the order model, query engine and validation

pub mod error;
pub mod order;
pub mod query;
pub mod service;
pub mod validation;

pub use error::{
    ConfigError, FieldErrors, FieldValidationError, OrderError, RequestError, Result, StorageError,
    ValidationError,
};
pub use order::{NewOrder, Order, OrderStatus};
pub use query::{ListParams, ListQuery, PagedResult, SortField, SortOrder};
pub use service::OrderService;
pub use validation::{OrderCandidate, ValidatedOrder};
