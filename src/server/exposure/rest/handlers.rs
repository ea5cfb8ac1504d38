//! Order HTTP handlers
//!
//! Handlers only decode requests, delegate to the query engine, validator
//! and order service, and pick status codes. Failures are returned as
//! [`OrderError`], which renders its own response.

use crate::core::query::{self, ListParams};
use crate::core::{Order, OrderError, ValidatedOrder};
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// GET /orders — sorted, paginated listing with a `Link` header
pub async fn list_orders(
    State(host): State<Arc<ServerHost>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, OrderError> {
    let limits = &host.config.pagination;
    let list_query = ListParams::from_pairs(pairs).resolve(limits)?;

    let snapshot = host.order_service.list().await?;
    let result = query::run_query(snapshot, &list_query, limits);

    let base = format!("{}{}", host.origin(&headers, &uri), uri.path());
    let link = query::link_header(&base, &result, &list_query);

    tracing::debug!(
        page = result.page,
        per_page = result.per_page,
        total = result.total,
        sort_field = %list_query.sort_field,
        sort_order = %list_query.sort_order,
        "orders listed"
    );

    Ok(([(header::LINK, link)], Json(result)).into_response())
}

/// POST /orders — validate and store a new order
pub async fn create_order(
    State(host): State<Arc<ServerHost>>,
    ValidatedOrder(new_order): ValidatedOrder,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let created = host.order_service.create(Order::create(new_order)).await?;

    tracing::info!(
        order_id = %created.id,
        order_number = %created.order_number,
        "order created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /orders/{order_id} — remove one order
pub async fn delete_order(
    State(host): State<Arc<ServerHost>>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, OrderError> {
    let Some(order) = host.order_service.get(&order_id).await? else {
        return Err(OrderError::NotFound { id: order_id });
    };
    let id = host.order_service.delete(&order.id).await?;

    tracing::info!(
        order_id = %id,
        order_number = %order.order_number,
        "order deleted"
    );

    Ok(Json(json!({ "deleted": true, "id": id })))
}
