//! API error types with HTTP response mapping.

use application::ApplicationError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Caller identity is missing or unusable.
    Unauthorized(String),
    /// Request body could not be read.
    BadRequest(String),
    /// Error from an order workflow.
    Application(ApplicationError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Application(err) => application_error_to_response(err),
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
            field,
        };
        (status, axum::Json(body)).into_response()
    }
}

fn application_error_to_response(err: ApplicationError) -> (StatusCode, String, Option<String>) {
    match err {
        ApplicationError::Validation { field, message } => {
            (StatusCode::BAD_REQUEST, message, Some(field))
        }
        ApplicationError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
        err @ ApplicationError::Internal { .. } => {
            let cause = std::error::Error::source(&err).map(ToString::to_string);
            tracing::error!(error = %err, cause = ?cause, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
                None,
            )
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError::Application(err)
    }
}
