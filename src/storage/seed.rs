//! Demo orders loaded at startup

use crate::core::{NewOrder, Order, OrderStatus};

const SEED: [(&str, &str, &str, OrderStatus, &str, f64); 20] = [
    ("o-111", "ORD-2025-0001", "Acme Sp. z o.o.", OrderStatus::New, "2025-10-05", 1999.99),
    ("o-112", "ORD-2025-0002", "Pixel Media", OrderStatus::Processing, "2025-10-18", 849.50),
    ("o-113", "ORD-2025-0003", "GenericITCompany", OrderStatus::New, "2025-11-02", 1250.00),
    ("o-114", "ORD-2025-0004", "NextGen Apps", OrderStatus::Shipped, "2025-09-29", 4320.75),
    ("o-115", "ORD-2025-0005", "UX Studio", OrderStatus::Delivered, "2025-09-20", 650.00),
    ("o-116", "ORD-2025-0006", "Creative Minds", OrderStatus::Cancelled, "2025-10-10", 299.99),
    ("o-117", "ORD-2025-0007", "CodeWorks", OrderStatus::Processing, "2025-10-15", 780.00),
    ("o-118", "ORD-2025-0008", "Bright Agency", OrderStatus::New, "2025-11-05", 1530.25),
    ("o-119", "ORD-2025-0009", "Studio Alfa", OrderStatus::Shipped, "2025-09-30", 425.40),
    ("o-120", "ORD-2025-0010", "Techify", OrderStatus::Processing, "2025-10-22", 2500.00),
    ("o-121", "ORD-2025-0011", "BlueSoft", OrderStatus::Delivered, "2025-09-28", 999.00),
    ("o-122", "ORD-2025-0012", "Rocket Digital", OrderStatus::New, "2025-11-12", 1780.50),
    ("o-123", "ORD-2025-0013", "MediaCraft", OrderStatus::Processing, "2025-10-14", 300.00),
    ("o-124", "ORD-2025-0014", "Northwind", OrderStatus::Shipped, "2025-09-27", 750.25),
    ("o-125", "ORD-2025-0015", "DesignHub", OrderStatus::New, "2025-11-01", 1899.99),
    ("o-126", "ORD-2025-0016", "Startup Garage", OrderStatus::Processing, "2025-10-25", 1425.00),
    ("o-127", "ORD-2025-0017", "LightHouse Inc.", OrderStatus::Cancelled, "2025-09-21", 560.00),
    ("o-128", "ORD-2025-0018", "AppVision", OrderStatus::Delivered, "2025-09-19", 2750.75),
    ("o-129", "ORD-2025-0019", "SkyTech", OrderStatus::New, "2025-11-20", 3200.00),
    ("o-130", "ORD-2025-0020", "FastTrack", OrderStatus::Processing, "2025-10-28", 400.00),
];

/// The 20 demo orders, in store order
pub fn seed_orders() -> Vec<Order> {
    SEED.iter()
        .map(|&(id, order_number, customer, status, due_date, total_gross)| {
            Order::with_id(
                id,
                NewOrder {
                    order_number: order_number.to_string(),
                    customer: customer.to_string(),
                    status,
                    due_date: due_date.to_string(),
                    total_gross,
                },
            )
        })
        .collect()
}
