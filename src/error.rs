// Store/seed error types shared by the CRUD handlers
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Failures that can surface while servicing a users request.
///
/// The API contract predates this rewrite: CRUD endpoints answer HTTP 200
/// with a `{"status": "error", "error": ...}` body for I/O and parse
/// failures. Seed failures are the one exception and become an opaque 500,
/// matching the original server where seeding ran outside the handlers'
/// catch blocks.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed fetch failed: {0}")]
    Seed(#[from] reqwest::Error),
}

impl StoreError {
    /// Render the in-body error envelope used by every CRUD endpoint.
    pub fn to_envelope(&self) -> serde_json::Value {
        json!({ "status": "error", "error": self.to_string() })
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::Seed(err) => {
                tracing::error!("seeding users collection failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            other => {
                tracing::error!("users store operation failed: {}", other);
                Json(other.to_envelope()).into_response()
            }
        }
    }
}
