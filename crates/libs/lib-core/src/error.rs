//! # Centralized Error Handling
//!
//! Application-wide error type [`AppError`] used across the workspace,
//! following the `thiserror` pattern. Each variant maps to an HTTP status
//! and a stable snake_case error code, and responses use the
//! [`ErrorResponse`](crate::dto::ErrorResponse) envelope.
//!
//! Internal error details are only exposed in the response body when the
//! debug flag is set; otherwise clients get a generic message and the full
//! error goes to the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input validation error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable snake_case error code carried in the response envelope.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "configuration_error",
            AppError::InvalidInput(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Internal(_) => "internal_server_error",
        }
    }

    /// Message exposed to clients.
    ///
    /// Server-side failures are replaced with a generic message unless
    /// `debug` is set.
    pub fn public_message(&self, debug: bool) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Config(_) | AppError::Internal(_) if debug => self.to_string(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Build the HTTP response for this error, honoring the debug flag.
    pub fn to_response(&self, debug: bool) -> Response {
        let body = Json(ErrorResponse::new(
            self.error_code(),
            self.public_message(debug),
        ));
        (self.status_code(), body).into_response()
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
///
/// Renders the non-verbose form and stashes the error in the response
/// extensions, so a state-aware response layer can re-render it with the
/// debug flag applied.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("server error: {self}");
        } else {
            tracing::debug!("client error: {self}");
        }

        let mut res = self.to_response(false);
        res.extensions_mut().insert(self);
        res
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}
