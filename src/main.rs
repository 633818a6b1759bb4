// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use drover::api::{self, AppState};
use drover::config::Config;
use drover::kubernetes::ClusterClients;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Drover API server");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: {} cluster(s) configured",
        config.kubeconfigs.len()
    );

    // One pre-authenticated client per configured cluster; startup fails
    // fast if any kubeconfig is unusable
    let clients = ClusterClients::from_kubeconfigs(&config.kubeconfigs).await?;

    let listen_address = config.listen_address.clone();
    let app = api::router(AppState { clients, config });

    let listener = TcpListener::bind(&listen_address).await?;
    info!("Listening on {}", listen_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
