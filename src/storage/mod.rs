//! Storage implementations for orders

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryOrderService;
pub use seed::seed_orders;
