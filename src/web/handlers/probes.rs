//! # Probe Handlers
//!
//! Each request runs its probe exactly once. Errors are logged with a per
//! request probe id and mapped to the fixed failure body.

use axum::extract::State;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::responses::{DB_CONNECTED, DB_FAILED, FS_FAILED, FS_SUCCESS_PREFIX};
use crate::logging::{log_probe_error, log_probe_outcome};
use crate::probes::{instance_identity, probe_database, probe_scratch_file, DatabaseParameters};
use crate::web::response_types::ProbeResponse;
use crate::web::state::ProbeWebState;

/// Database probe: GET /db
///
/// Connection parameters are read from the environment on every call.
pub async fn database_probe(State(state): State<Arc<ProbeWebState>>) -> ProbeResponse {
    let probe_id = Uuid::new_v4().to_string();
    let params = DatabaseParameters::from_environment(state.environment.as_ref());

    match probe_database(&params).await {
        Ok(()) => {
            log_probe_outcome("db", &probe_id, "connected", None);
            ProbeResponse::success(DB_CONNECTED)
        }
        Err(e) => {
            log_probe_error("db", &probe_id, &e);
            ProbeResponse::failure(state.failure_status(), DB_FAILED)
        }
    }
}

/// Filesystem probe: GET /fs
pub async fn filesystem_probe(State(state): State<Arc<ProbeWebState>>) -> ProbeResponse {
    let probe_id = Uuid::new_v4().to_string();
    let identity = instance_identity(state.environment.as_ref());

    match probe_scratch_file(&state.scratch, &identity).await {
        Ok(contents) => {
            log_probe_outcome("fs", &probe_id, "written", Some(&identity));
            ProbeResponse::success(format!("{FS_SUCCESS_PREFIX}{contents}"))
        }
        Err(e) => {
            log_probe_error("fs", &probe_id, &e);
            ProbeResponse::failure(state.failure_status(), FS_FAILED)
        }
    }
}
