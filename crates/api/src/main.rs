use std::sync::Arc;

use anyhow::Context;

use stockroom_infra::{AppConfig, InMemoryProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let store = Arc::new(InMemoryProductStore::new());
    if config.seed_demo {
        let seeded = stockroom_api::app::services::seed_demo(store.as_ref())
            .context("failed to seed demo products")?;
        tracing::info!(count = seeded, "seeded demo products");
    }

    let app = stockroom_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
