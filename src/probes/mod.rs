//! # Probes
//!
//! Each probe exercises one external dependency once and reports success or a
//! [`ProbeError`](crate::error::ProbeError). Probes never retry and never
//! hold resources past their own return.

pub mod database;
pub mod filesystem;

pub use database::{probe_database, DatabaseParameters};
pub use filesystem::{identity_line, instance_identity, probe_scratch_file, ScratchFile};
