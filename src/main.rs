use anyhow::{Context, Result};
use cms_translations_api::{
    cms::SnapshotStore,
    config::Config,
    openapi,
    retry::RetryConfig,
    server::{self, AppState},
    services::TranslationsApi,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cms_translations_api=info".parse()?),
        )
        .init();

    info!("Starting CMS translations API");

    let config = Config::from_env()?;

    let snapshot = config
        .snapshot_source
        .load(&RetryConfig::snapshot_fetch())
        .await
        .context("Failed to load CMS snapshot")?;

    let store = Arc::new(SnapshotStore::new(snapshot));
    let api = TranslationsApi::new(store.clone(), store, config.resolution_options());

    let documents = openapi::default_registry();
    for name in documents.names() {
        info!("Registered API document: {}", name);
    }

    let app = server::build_app(AppState::new(api, documents));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    server::serve(listener, app).await
}
