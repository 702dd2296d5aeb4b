//! HTTP server initialization and runtime setup.
//!
//! Opens the link store, wires the services, and runs the Axum server until
//! Ctrl-C.

use crate::config::Config;
use crate::infrastructure::clicks::NullClickIngestion;
use crate::infrastructure::logging::TracingEventLog;
use crate::infrastructure::storage::FileStore;
use crate::routes::app_service;
use crate::state::{AppState, ServiceOptions};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = FileStore::open(&config.data_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to open data directory '{}'",
                config.data_dir.display()
            )
        })?;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(TracingEventLog::new()),
        Arc::new(NullClickIngestion::new()),
        ServiceOptions::from(&config),
    );

    let app = app_service(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
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
    tracing::info!("Shutdown signal received");
}
