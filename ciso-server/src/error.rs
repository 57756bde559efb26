//! Error types for the HTTP API
//!
//! Every fault leaves the service as `{"error": "<description>"}`. Returned
//! errors go through [`ApiError`]'s `IntoResponse`; panics are caught by the
//! `CatchPanicLayer` installed in [`crate::router`] and rendered by
//! [`panic_response`].

use crate::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ciso_core::MetricsError;
use std::any::Any;
use std::fmt;
use tracing::{error, warn};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path (404)
    NotFound(String),

    /// Internal server error (500)
    Internal(String),

    /// Metrics generation failed (500)
    Metrics(MetricsError),
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal(_) => "internal",
            ApiError::Metrics(_) => "metrics",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(path) => write!(f, "not found: {}", path),
            ApiError::Internal(msg) => write!(f, "{}", msg),
            ApiError::Metrics(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<MetricsError> for ApiError {
    fn from(err: MetricsError) -> Self {
        ApiError::Metrics(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(kind = self.kind(), "Request failed: {}", message);
            crate::metrics::record_fault(self.kind());
        } else {
            warn!("{}", message);
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Render a caught panic as the 500 fault envelope
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(message).into_response()
}
