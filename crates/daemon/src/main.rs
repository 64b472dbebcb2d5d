//! MQSC Generator - HTTP Server Entry Point

mod settings;

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use mqscgen_core::application::{shutdown_channel, SessionSweeper};
use mqscgen_core::port::id_provider::UuidProvider;
use mqscgen_core::port::time_provider::SystemTimeProvider;
use mqscgen_infra_memory::InMemorySessionStore;
use mqscgen_web::WebServer;

use crate::settings::DaemonConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "mqscgen=info,tower_http=debug";

fn init_logging(format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match format {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::load().context("Invalid configuration")?;

    // 2. Initialize logging
    init_logging(&config.log_format)?;

    info!("MQSC Generator v{} starting...", VERSION);
    info!(
        host = %config.host,
        port = config.port,
        session_ttl_minutes = config.session_ttl_minutes,
        "Configuration loaded"
    );

    // 3. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let id_provider = Arc::new(UuidProvider);
    let sessions = Arc::new(InMemorySessionStore::new(time_provider));

    let (shutdown_tx, shutdown_rx) = shutdown_channel();

    // 4. Start HTTP server
    let server = WebServer::new(config.web(), sessions.clone(), id_provider);
    let server_handle = server
        .start(shutdown_rx.clone())
        .await
        .context("HTTP server start failed")?;

    // 5. Start session sweeper
    let sweeper = SessionSweeper::new(sessions, config.maintenance(), config.sweep_interval());
    let sweeper_handle = tokio::spawn(sweeper.run(shutdown_rx));

    info!(address = %server_handle.local_addr, "System ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    shutdown_tx.shutdown();
    match tokio::time::timeout(Duration::from_secs(5), server_handle.task).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => tracing::error!(error = ?e, "HTTP server failed"),
        Ok(Err(e)) => tracing::error!(error = ?e, "HTTP server task panicked"),
        Err(_) => tracing::warn!("HTTP server did not stop within 5s"),
    }
    let _ = tokio::time::timeout(Duration::from_secs(1), sweeper_handle).await;

    info!("Shutdown complete.");

    Ok(())
}
