//! # Probe Server Bootstrap
//!
//! Binds the listener, spawns the axum server in the background and hands back
//! a handle that can stop it gracefully.

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::{ConfigurationError, ProbeConfig};
use crate::environment::EnvironmentSource;
use crate::web::{create_app, ProbeWebState};

/// Server lifecycle errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Handle to a running probe server
#[derive(Debug)]
pub struct ProbeServer {
    local_addr: SocketAddr,
    shutdown_sender: Option<oneshot::Sender<()>>,
    server_task: JoinHandle<std::io::Result<()>>,
}

impl ProbeServer {
    /// Bind and start serving in a background task
    pub async fn start(
        config: ProbeConfig,
        environment: Arc<dyn EnvironmentSource>,
    ) -> Result<Self, ServerError> {
        let address = config.server.socket_addr()?;

        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind { address, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { address, source })?;

        let scratch_path = config.filesystem.scratch_path.clone();
        let app = create_app(Arc::new(ProbeWebState::new(config, environment)));

        let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();

        let server_task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    if shutdown_receiver.await.is_ok() {
                        info!("Probe server shutdown signal received");
                    }
                })
                .await;

            if let Err(e) = &result {
                error!("Probe web server error: {}", e);
            }
            result
        });

        info!(
            address = %local_addr,
            scratch_path = %scratch_path.display(),
            "Probe server listening"
        );

        Ok(Self {
            local_addr,
            shutdown_sender: Some(shutdown_sender),
            server_task,
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, let in-flight requests finish, and wait
    pub async fn stop(mut self) -> Result<(), ServerError> {
        if let Some(sender) = self.shutdown_sender.take() {
            // Receiver is gone only if the server already exited
            let _ = sender.send(());
        }

        self.server_task.await?.map_err(ServerError::Serve)?;
        info!(address = %self.local_addr, "Probe server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::StaticEnvironment;

    fn local_config() -> ProbeConfig {
        let mut config = ProbeConfig::default();
        config.server.bind_address = "127.0.0.1:0".to_string();
        config
    }

    #[tokio::test]
    async fn test_start_resolves_ephemeral_port_and_stops() {
        let server = ProbeServer::start(local_config(), Arc::new(StaticEnvironment::new()))
            .await
            .unwrap();

        assert_ne!(server.local_addr().port(), 0);
        server.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let first = ProbeServer::start(local_config(), Arc::new(StaticEnvironment::new()))
            .await
            .unwrap();

        let mut config = local_config();
        config.server.bind_address = first.local_addr().to_string();
        let err = ProbeServer::start(config, Arc::new(StaticEnvironment::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Bind { .. }));
        first.stop().await.unwrap();
    }
}
