//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the in-process customer module.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Wire the customer module
    let customers = customer_service_lib::connect(&config.customers).await?;
    let state = AppState::from(customers);

    // Build router
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.server.addr().parse()?;
    info!(service = %config.server.service_name, "Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
