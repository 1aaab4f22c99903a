//! # filialen-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the Filialen API.
//! Binds to configurable port (default 8080).

use std::sync::Arc;

use anyhow::Context;
use filialen_api::db::filialen::PgFiliaalRepository;
use filialen_api::repository::{FiliaalRepository, InMemoryFiliaalRepository};
use filialen_api::state::{AppConfig, AppState, LogFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
    tracing::debug!(?config, "configuration loaded");

    // Initialize database pool (optional: absent means in-memory only).
    let repository: Arc<dyn FiliaalRepository> =
        match filialen_api::db::init_pool(&config).await.map_err(|e| {
            tracing::error!("Database initialization failed: {e}");
            e
        })? {
            Some(pool) => Arc::new(PgFiliaalRepository::new(pool)),
            None => Arc::new(InMemoryFiliaalRepository::new()),
        };

    let port = config.port;
    let app = filialen_api::app(AppState::with_config(config, repository));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Filialen API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
