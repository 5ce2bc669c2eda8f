use std::sync::Arc;

use anyhow::Context;

use adopta_api::config::AppConfig;
use adopta_api::source::{InMemoryProductSource, ProductSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    adopta_observability::init(config.log_format);

    let source = match &config.seed_file {
        Some(path) => InMemoryProductSource::load_seed(path)?,
        None => {
            tracing::warn!("ADOPTA_SEED_FILE not set; starting with an empty catalog");
            InMemoryProductSource::new()
        }
    };
    tracing::info!(products = source.list().len(), "catalog loaded");

    let app = adopta_api::app::build_app(Arc::new(source));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
