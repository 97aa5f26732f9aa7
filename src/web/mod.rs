//! Probe Web Module
//!
//! Axum application serving the index page and the two probe endpoints.
//! There is no request timeout layer: a probe runs until its I/O completes
//! or fails.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;
pub mod response_types;
pub mod routes;
pub mod state;

pub use response_types::ProbeResponse;
pub use state::ProbeWebState;

/// Create the web application with all routes and middleware
pub fn create_app(state: Arc<ProbeWebState>) -> Router {
    let app = Router::new()
        .merge(routes::probe_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Probe web application created");
    app
}
