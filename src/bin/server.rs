//! # Probe Server
//!
//! Thin wrapper binary running the probe service until Ctrl+C or SIGTERM.
//!
//! ## Usage
//!
//! ```bash
//! # Run with defaults (0.0.0.0:8080, /staging/scratch.txt)
//! cargo run --bin probe-server
//!
//! # Override the listen address and scratch file
//! PROBE_SERVER__BIND_ADDRESS=127.0.0.1:3000 \
//! PROBE_FILESYSTEM__SCRATCH_PATH=/tmp/scratch.txt \
//!   cargo run --bin probe-server
//! ```

use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use probe_service::bootstrap::ProbeServer;
use probe_service::config::ProbeConfig;
use probe_service::environment::ProcessEnvironment;
use probe_service::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    info!("Starting Probe Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));
    info!(
        "   Build Mode: {}",
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let config = ProbeConfig::load().context("Failed to load configuration")?;
    info!("   Environment: {}", config.environment);

    let server = ProbeServer::start(config, Arc::new(ProcessEnvironment))
        .await
        .context("Failed to start probe server")?;

    info!("Probe Server started on {}", server.local_addr());
    info!("   Press Ctrl+C to shutdown gracefully");

    shutdown_signal().await?;

    info!("Shutdown signal received, stopping...");
    server.stop().await.context("Failed to stop probe server")?;
    info!("Probe Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?;

        tokio::select! {
            result = signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl+C")?;
                info!("Received Ctrl+C");
            },
            _ = terminate.recv() => {
                info!("Received SIGTERM");
            },
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl+C")?;
        info!("Received Ctrl+C");
    }

    Ok(())
}
