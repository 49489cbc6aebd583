use crate::api::routes;
use crate::relay::RelayHandler;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Starts and runs the HTTP server until Ctrl-C is received
///
/// # Arguments
/// * `addr` - Address to listen on
/// * `relay` - Relay handler serving the chat routes
///
/// # Returns
/// * `Result<(), std::io::Error>` - Error if binding or serving fails
pub async fn launch_server(addr: SocketAddr, relay: RelayHandler) -> Result<(), std::io::Error> {
    let app = routes::app(relay);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
