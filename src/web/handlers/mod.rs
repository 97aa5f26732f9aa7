//! # Web Request Handlers
//!
//! `index` serves the landing page; `probes` runs the database and filesystem
//! probes.

pub mod index;
pub mod probes;
