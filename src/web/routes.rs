//! Probe Web Routes

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::web::{handlers, state::ProbeWebState};

/// Index page and the two probes, all GET only
pub fn probe_routes() -> Router<Arc<ProbeWebState>> {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/db", get(handlers::probes::database_probe))
        .route("/fs", get(handlers::probes::filesystem_probe))
}
