//! Axum extractor for validated order payloads
//!
//! `ValidatedOrder` reads the body as JSON, coerces it into an
//! [`OrderCandidate`] and runs every field rule before the handler is called.
//! The body is parsed whatever its `Content-Type`.

use super::OrderCandidate;
use crate::core::error::{OrderError, RequestError};
use crate::core::order::NewOrder;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// A creation payload that passed validation
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_order(
///     State(host): State<Arc<ServerHost>>,
///     ValidatedOrder(new_order): ValidatedOrder,
/// ) -> Result<(StatusCode, Json<Order>), OrderError> {
///     // new_order already satisfies every order invariant
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedOrder(pub NewOrder);

impl ValidatedOrder {
    /// Get the inner payload
    pub fn into_inner(self) -> NewOrder {
        self.0
    }
}

impl<S> FromRequest<S> for ValidatedOrder
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| invalid_json(e.body_text()))?;
        let payload: Value =
            serde_json::from_slice(&body).map_err(|e| invalid_json(e.to_string()))?;

        OrderCandidate::from_json(&payload)
            .into_new_order()
            .map(ValidatedOrder)
            .map_err(|errors| {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "order rejected");
                OrderError::from(errors).into_response()
            })
    }
}

fn invalid_json(message: String) -> Response {
    OrderError::from(RequestError::InvalidJson { message }).into_response()
}
