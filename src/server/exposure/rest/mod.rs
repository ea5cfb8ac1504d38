//! REST API exposure
//!
//! The REST exposure consumes a `ServerHost` and produces an Axum `Router`:
//!
//! ```text
//! GET    /health              → health_check
//! GET    /orders              → list_orders
//! POST   /orders              → create_order
//! DELETE /orders/{order_id}   → delete_order
//! ```

pub mod handlers;

use super::super::host::ServerHost;
use axum::{
    Json, Router,
    routing::{delete, get},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with health and order routes, wrapped in a request
    /// tracing layer.
    pub fn build_router(host: Arc<ServerHost>) -> Router {
        Self::health_routes()
            .merge(Self::order_routes(host))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Order list/create/delete routes
    pub fn order_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route(
                "/orders",
                get(handlers::list_orders).post(handlers::create_order),
            )
            .route("/orders/{order_id}", delete(handlers::delete_order))
            .with_state(host)
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "order-desk"
        }))
    }
}
