//! Binding and running the HTTP server.

use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;
use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Serves the game on the configured address until Ctrl-C.
#[instrument(skip_all, fields(addr = %config.bind_addr()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(AppState::new());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
