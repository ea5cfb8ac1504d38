use anyhow::Result;
use order_desk::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    order_desk::observability::init(&config.logging);

    let service = if config.seed {
        InMemoryOrderService::with_orders(seed_orders())
    } else {
        InMemoryOrderService::new()
    };
    tracing::info!(orders = service.count().await?, "order store ready");

    ServerBuilder::new()
        .with_order_service(service)
        .with_config(config)
        .serve()
        .await
}
