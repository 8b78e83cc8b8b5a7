use clap::Parser;
use sitedir::config::Config;
use sitedir::server::{build_router, AppState};
use sitedir::storage::store::JsonFileStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = Arc::new(JsonFileStore::new(&config.data));
    tracing::info!("Using data file {}", store.path().display());
    tracing::info!("Search threshold {}", config.threshold);

    let app = build_router(AppState::with_threshold(store, config.threshold));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Server is running on http://{}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
