//! Typed error handling for the order service
//!
//! Every failure the service can report is an [`OrderError`]. Each category
//! knows its HTTP status code and machine-readable error code, and renders
//! itself as the JSON body clients expect:
//!
//! - [`ValidationError`]: creation payload failed one or more field rules (422)
//! - [`RequestError`]: malformed query or body (400)
//! - [`OrderError::NotFound`]: unknown order id (404)
//! - [`StorageError`]: the in-memory store could not be accessed (500)
//! - [`ConfigError`]: invalid configuration, only raised at startup
//!
//! # Example
//!
//! ```rust,ignore
//! match service.delete("o-111").await {
//!     Ok(id) => println!("removed {id}"),
//!     Err(OrderError::NotFound { id }) => println!("{id} is already gone"),
//!     Err(e) => eprintln!("other error: {e}"),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::json;

/// Convenience alias used across the crate
pub type Result<T, E = OrderError> = std::result::Result<T, E>;

/// The main error type for the order service
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Creation payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request (query string or body)
    #[error(transparent)]
    Request(#[from] RequestError),

    /// No order with the given id exists
    #[error("Order with id '{id}' not found")]
    NotFound { id: String },

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            OrderError::Request(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::Request(e) => e.error_code(),
            OrderError::NotFound { .. } => "NOT_FOUND",
            OrderError::Storage(_) => "STORAGE_ERROR",
            OrderError::Config(_) => "CONFIG_ERROR",
            OrderError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Build the JSON body sent to clients
    pub fn to_body(&self) -> serde_json::Value {
        match self {
            OrderError::Validation(ValidationError::FieldErrors(errors)) => json!({
                "code": self.error_code(),
                "fieldErrors": errors.to_list(),
            }),
            OrderError::Request(RequestError::InvalidSortField { .. }) => json!({
                "error": "Invalid sort field",
            }),
            OrderError::NotFound { .. } => json!({
                "code": self.error_code(),
                "message": "Order not found",
            }),
            _ => json!({
                "code": self.error_code(),
                "message": self.to_string(),
            }),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), "request rejected");
        }
        (status, Json(self.to_body())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error, as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Field name → message mapping produced by the validator
///
/// Keeps the order in which rules were evaluated so responses list fields
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`; a later failure for the same field replaces it
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// Flatten into the `[{field, message}]` wire form
    pub fn to_list(&self) -> Vec<FieldValidationError> {
        self.0
            .iter()
            .map(|(field, message)| FieldValidationError {
                field: (*field).to_string(),
                message: message.clone(),
            })
            .collect()
    }
}

/// Errors related to input validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed their rules
    #[error("Validation errors: {}", display_fields(.0))]
    FieldErrors(FieldErrors),
}

fn display_fields(errors: &FieldErrors) -> String {
    errors
        .0
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<FieldErrors> for OrderError {
    fn from(errors: FieldErrors) -> Self {
        OrderError::Validation(ValidationError::FieldErrors(errors))
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to malformed requests
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// `sortField` is not one of the sortable order attributes
    #[error("Invalid sort field: '{value}'")]
    InvalidSortField { value: String },

    /// Body could not be read as JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl RequestError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidSortField { .. } => "INVALID_SORT_FIELD",
            RequestError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the order store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    #[error("Failed to acquire {mode} lock: {message}")]
    LockPoisoned { mode: &'static str, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error reading '{path}': {message}")]
    IoError { path: String, message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{f}'"))
        .unwrap_or_default()
}
