//! # Probe Service Configuration
//!
//! Service-level settings loaded once at startup: where to listen, how to report
//! probe failures, and where the shared scratch file lives.
//!
//! The database connection parameters and the instance identity are not part
//! of this structure. They are read from the environment on every request (see
//! [`crate::probes`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use probe_service::config::ProbeConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProbeConfig::load()?;
//! let addr = config.server.socket_addr()?;
//! println!("{} -> {}", addr, config.filesystem.scratch_path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::constants::defaults;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::{detect_environment, CONFIG_FILE_ENV, ENV_PREFIX};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Deployment environment name (development, test, production)
    pub environment: String,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Shared filesystem settings
    pub filesystem: FilesystemConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_address: String,

    /// Report probe failures as 503 instead of 200. Bodies are unchanged.
    #[serde(default)]
    pub failure_status_unavailable: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilesystemConfig {
    pub scratch_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            environment: defaults::ENVIRONMENT.to_string(),
            server: ServerConfig::default(),
            filesystem: FilesystemConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: defaults::BIND_ADDRESS.to_string(),
            failure_status_unavailable: false,
        }
    }
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            scratch_path: PathBuf::from(defaults::SCRATCH_PATH),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        self.bind_address.parse().map_err(|e: std::net::AddrParseError| {
            ConfigurationError::invalid_value("server.bind_address", &self.bind_address, e.to_string())
        })
    }
}

impl ProbeConfig {
    /// Reject values the server cannot start with
    pub fn validate(&self) -> ConfigResult<()> {
        self.server.socket_addr()?;

        if self.filesystem.scratch_path.as_os_str().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "filesystem.scratch_path",
                "",
                "scratch path must not be empty",
            ));
        }

        Ok(())
    }

    pub fn is_production_environment(&self) -> bool {
        self.environment == "production"
    }
}
