//! HTTP server startup.
//!
//! [`serve`] wires the config, user-state store, and text-generation
//! provider into a running axum server with graceful shutdown.

use anyhow::Result;

use crate::config::CandorConfig;
use crate::routes::{app_router, AppState};

/// Start the HTTP API server and run until ctrl-c.
pub async fn serve(config: CandorConfig) -> Result<()> {
    let bind_addr = config.bind_addr();

    let state = AppState::new(config)?;
    tracing::info!(provider = %state.config.generation.provider, "generation provider ready");

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "candor API listening at http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
