//! # Probe Web Application State
//!
//! Shared state handed to every handler: the startup configuration, the
//! environment source read on each request, and the scratch file.

use axum::http::StatusCode;
use std::sync::Arc;

use crate::config::ProbeConfig;
use crate::environment::EnvironmentSource;
use crate::probes::ScratchFile;

#[derive(Debug)]
pub struct ProbeWebState {
    pub config: ProbeConfig,

    /// Source of `DB_*` and `HOSTNAME`, consulted on every request
    pub environment: Arc<dyn EnvironmentSource>,

    pub scratch: ScratchFile,
}

impl ProbeWebState {
    pub fn new(config: ProbeConfig, environment: Arc<dyn EnvironmentSource>) -> Self {
        let scratch = ScratchFile::new(config.filesystem.scratch_path.clone());
        Self {
            config,
            environment,
            scratch,
        }
    }

    /// Status code used when a probe fails
    pub fn failure_status(&self) -> StatusCode {
        if self.config.server.failure_status_unavailable {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::OK
        }
    }
}
