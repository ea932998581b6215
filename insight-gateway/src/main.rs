//! Entry point for the `insight-gateway` HTTP server.

use std::sync::Arc;

use insight_gateway::{
    config::{EnvFile, GatewayConfig},
    routes::create_router,
    state::AppState,
};
use insight_store::{ConnectionManager, MongoConnector};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load `.env` before the subscriber reads RUST_LOG.
    let env_file = EnvFile::load();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match env_file {
        EnvFile::Loaded(path) => info!(path = %path.display(), "loaded environment file"),
        EnvFile::Invalid(e) => warn!(error = %e, "failed to load environment file"),
        EnvFile::Missing => {}
    }

    let config = GatewayConfig::from_env();
    let connections = Arc::new(ConnectionManager::new(MongoConnector));

    // Connect before binding so an unreachable store stops the process here.
    match config.mongo_uri.as_deref() {
        Some(uri) => {
            if let Err(e) = connections.ensure_connection(uri).await {
                tracing::error!(error = %e, "error connecting to document store");
                std::process::exit(1);
            }
        }
        None => warn!("MONGO_URI is not set; data routes will fail"),
    }

    let app = create_router(AppState::new(connections, config.mongo_uri.clone()));

    let listener = match tokio::net::TcpListener::bind(&config.listen_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %config.listen_addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %config.listen_addr, "insight-gateway listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }

    info!("server shutdown complete");
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl-C, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
