use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Request-level errors
// ---------------------------------------------------------------------------

/// Errors raised while answering a dashboard request.
///
/// Startup / loading failures are `anyhow` errors instead; they never reach a client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("unknown launch site '{0}' (expected one of: all, lc-40, slc-40, lc-39a, slc-4e)")]
    UnknownSite(String),

    #[error("invalid payload range [{low}, {high}]")]
    InvalidRange { low: f64, high: f64 },

    #[error("missing callback input '{0}'")]
    MissingInput(String),

    #[error("invalid value for input '{id}': {reason}")]
    InvalidInput { id: String, reason: String },

    #[error("no callback registered for output '{0}'")]
    UnknownOutput(String),

    #[error("no component '{0}' in the page layout")]
    UnknownComponent(String),

    #[error("a callback for output '{0}' is already registered")]
    DuplicateCallback(String),
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::UnknownSite(_)
            | DashboardError::InvalidRange { .. }
            | DashboardError::MissingInput(_)
            | DashboardError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            DashboardError::UnknownOutput(_) | DashboardError::UnknownComponent(_) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::DuplicateCallback(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body returned to the browser.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        log::warn!("Rejected request: {self}");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
