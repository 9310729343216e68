//! Serve command - Starts the HTTP server.

use std::future::Future;
use std::io;
use std::sync::Arc;

use crate::api::{cors_layer, create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

use super::close_after;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    let config = apply_overrides(args, config);
    let db = Arc::new(Database::connect(&config).await?);

    let app_state = AppState::from_database(db.clone());
    let app = create_router(app_state).layer(cors_layer(&config.allowed_origin)?);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)));

    close_after(served, &db).await
}

/// Command-line host and port take precedence over the configuration.
fn apply_overrides(args: ServeArgs, mut config: Config) -> Config {
    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }
    config
}

/// Resolves once `signal` fires. If the signal cannot be installed the
/// server keeps running until the process is killed.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
