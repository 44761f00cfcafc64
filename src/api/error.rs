//! Error-to-response mapping for the HTTP layer.
//!
//! Wraps the crate error so axum handlers can use `?` directly. Domain
//! errors map onto client status codes with a `{"detail": ...}` body;
//! storage and startup errors are logged and collapsed into an opaque 500.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// HTTP-facing wrapper around [`Error`].
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::UserNotFound { .. }
            | Error::CategoryNotFound { .. }
            | Error::ProductNotFound { .. }
            | Error::ReviewNotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidGrade { .. } | Error::InvalidRole { .. } | Error::Config { .. } => {
                StatusCode::BAD_REQUEST
            }
            Error::Forbidden { .. } => StatusCode::FORBIDDEN,
            Error::Database(_) | Error::Io(_) | Error::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Convenience `Result` type for handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;
