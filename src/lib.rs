#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections

//! # Probe Service
//!
//! Diagnostic web service for checking, from inside a running container, that
//! the container can reach its PostgreSQL database and its shared filesystem.
//!
//! ## Endpoints
//!
//! - `GET /` - static index linking to the two probes
//! - `GET /db` - opens one database connection, runs `SELECT 1`, closes it
//! - `GET /fs` - appends this instance's identity to the shared scratch file
//!   and echoes the whole file back
//!
//! Probe failures never reach the caller as errors: they are logged and
//! turned into fixed response bodies.
//!
//! ## Module Organization
//!
//! - [`config`] - Startup configuration (bind address, scratch path)
//! - [`environment`] - Per-request environment lookups
//! - [`probes`] - Database and filesystem probes
//! - [`web`] - Axum router, state and handlers
//! - [`bootstrap`] - Server lifecycle
//! - [`logging`] - Tracing initialization
//! - [`error`] - Probe error types
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use probe_service::bootstrap::ProbeServer;
//! use probe_service::config::ProbeConfig;
//! use probe_service::environment::ProcessEnvironment;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ProbeConfig::load()?;
//! let server = ProbeServer::start(config, Arc::new(ProcessEnvironment)).await?;
//! println!("listening on {}", server.local_addr());
//! server.stop().await?;
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod logging;
pub mod probes;
pub mod web;

pub use error::{ProbeError, ProbeResult};
