//! HTTP server startup.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use receipt_core::ServerConfig;

use crate::routes::{router, AppState};

/// Bind `addr` and serve the receipt API until Ctrl-C.
#[instrument(skip(state, config))]
pub async fn start_server(
    addr: SocketAddr,
    state: AppState,
    config: &ServerConfig,
) -> std::io::Result<()> {
    let vendor = state.service.vendor_name().to_string();
    let app = router(state, config);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, %vendor, "Receipt OCR server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Receipt OCR server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
