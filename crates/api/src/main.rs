use std::sync::Arc;

use anyhow::Context;

use campustrade_api::config::ApiConfig;
use campustrade_infra::InMemoryCatalogStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    campustrade_observability::init();

    let config = ApiConfig::from_env()?;

    let catalog = Arc::new(InMemoryCatalogStore::new());
    let app = campustrade_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
