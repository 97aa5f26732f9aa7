//! # Probe Response Types
//!
//! Probe outcomes become HTML bodies with a status code. Failures carry a
//! fixed body; the underlying error is only ever logged.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Body and status returned by a probe endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProbeResponse {
    pub fn success(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn failure(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for ProbeResponse {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}
