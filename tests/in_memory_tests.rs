//! Tests for the in-memory order service and the list query engine over it

use order_desk::core::query;
use order_desk::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn new_order(order_number: &str, due_date: &str, total_gross: f64) -> NewOrder {
    OrderCandidate::from_json(&json!({
        "orderNumber": order_number,
        "customer": "Test Customer",
        "status": "processing",
        "dueDate": due_date,
        "totalGross": total_gross,
    }))
    .into_new_order()
    .unwrap()
}

fn list_query(params: ListParams) -> ListQuery {
    params.resolve(&PaginationConfig::default()).unwrap()
}

#[tokio::test]
async fn test_create_inserts_at_front() {
    let service = InMemoryOrderService::with_orders(seed_orders());

    let created = service
        .create(Order::create(new_order("ORD-NEW-1", "2026-02-01", 12.5)))
        .await
        .unwrap();

    let orders = service.list().await.unwrap();
    assert_eq!(orders.len(), 21);
    assert_eq!(orders[0], created);
    assert_eq!(orders[1].id, "o-111");
}

#[tokio::test]
async fn test_get_finds_by_id() {
    let service = InMemoryOrderService::with_orders(seed_orders());

    let order = service.get("o-120").await.unwrap().unwrap();
    assert_eq!(order.customer, "Techify");
    assert_eq!(order.status, OrderStatus::Processing);

    assert!(service.get("o-999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let service = InMemoryOrderService::with_orders(seed_orders());

    let id = service.delete("o-125").await.unwrap();
    assert_eq!(id, "o-125");
    assert_eq!(service.count().await.unwrap(), 19);
    assert!(service.get("o-125").await.unwrap().is_none());

    let err = service.delete("o-125").await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound { ref id } if id == "o-125"));
    assert_eq!(service.count().await.unwrap(), 19);
}

#[tokio::test]
async fn test_clones_share_the_store() {
    let service = InMemoryOrderService::new();
    let other = service.clone();

    other
        .create(Order::create(new_order("ORD-SHARED", "2026-01-01", 1.0)))
        .await
        .unwrap();

    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_are_all_kept() {
    let service = Arc::new(InMemoryOrderService::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create(Order::create(new_order(
                        &format!("ORD-CONC-{i:02}"),
                        "2026-03-01",
                        f64::from(i + 1),
                    )))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(service.count().await.unwrap(), 16);
}

#[tokio::test]
async fn test_query_over_store_snapshot() {
    let service = InMemoryOrderService::with_orders(seed_orders());
    let snapshot = service.list().await.unwrap();

    let result = query::run_query(
        snapshot,
        &list_query(ListParams {
            page: Some("2".to_string()),
            per_page: Some("5".to_string()),
            sort_field: Some("id".to_string()),
            sort_order: Some("asc".to_string()),
        }),
        &PaginationConfig::default(),
    );

    let ids: Vec<_> = result.items.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o-116", "o-117", "o-118", "o-119", "o-120"]);
    assert_eq!(result.total_pages, 4);
    assert!(result.has_prev);
    assert!(result.has_next);
}

#[tokio::test]
async fn test_due_date_sorts_by_calendar_time() {
    let service = InMemoryOrderService::new();
    for (number, due) in [
        ("ORD-DATE-1", "2025-10-01"),
        ("ORD-DATE-2", "2025-09-30"),
        ("ORD-DATE-3", "2024-12-31"),
    ] {
        service
            .create(Order::create(new_order(number, due, 5.0)))
            .await
            .unwrap();
    }

    let result = query::run_query(
        service.list().await.unwrap(),
        &list_query(ListParams::default()),
        &PaginationConfig::default(),
    );

    let dates: Vec<_> = result.items.iter().map(|o| o.due_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-12-31", "2025-09-30", "2025-10-01"]);
}

#[tokio::test]
async fn test_query_does_not_reorder_store() {
    let service = InMemoryOrderService::with_orders(seed_orders());

    let _ = query::run_query(
        service.list().await.unwrap(),
        &list_query(ListParams {
            sort_field: Some("totalGross".to_string()),
            sort_order: Some("desc".to_string()),
            ..Default::default()
        }),
        &PaginationConfig::default(),
    );

    let stored = service.list().await.unwrap();
    assert_eq!(stored[0].id, "o-111");
    assert_eq!(stored[19].id, "o-130");
}
