//! CISO Dashboard HTTP Server binary

use anyhow::Context;
use ciso_core::MetricsGenerator;
use ciso_server::{app, logging, AppState, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;

    logging::init_logging(config.log_format)?;

    info!("Starting CISO Dashboard API v{}", env!("CARGO_PKG_VERSION"));

    if let Some(addr) = config.metrics_address {
        ciso_server::metrics::init_prometheus(addr)
            .with_context(|| format!("failed to start Prometheus exporter on {}", addr))?;
        info!("Prometheus exporter listening on {}", addr);
    }
    ciso_server::metrics::init_metrics();

    // One generator per process: the incident stream is seeded once here
    let generator = Arc::new(MetricsGenerator::new());
    let state = AppState::new(generator);

    let app = app(state.clone());

    info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, shutting down gracefully...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!(
        uptime_seconds = state.uptime_seconds(),
        incident_draws = state.generator.draws(),
        "Server shutdown complete"
    );
    Ok(())
}
