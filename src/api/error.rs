//! Structured API error responses with error codes
//!
//! Every error leaves the service as `{ "status", "message", "code" }` with a
//! stable machine-readable code and an `x-error-code` header.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::infra::EvidenceError;

// ============================================================================
// Error Codes
// ============================================================================

/// Error codes for API responses
///
/// These codes are stable and can be used by clients for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// `controlId` query parameter absent or empty
    MissingControlId,
    /// No route for the requested path
    ResourceNotFound,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::MissingControlId => StatusCode::BAD_REQUEST,
            ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingControlId => "MISSING_CONTROL_ID",
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Structured Error Response
// ============================================================================

/// Error body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code
    pub code: ErrorCode,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: code.http_status().as_u16(),
            message: message.into(),
            code,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code;
        let mut response = (status, Json(self)).into_response();

        response.headers_mut().insert(
            axum::http::header::HeaderName::from_static("x-error-code"),
            axum::http::HeaderValue::from_static(code.as_str()),
        );

        response
    }
}

impl From<EvidenceError> for ApiError {
    fn from(err: EvidenceError) -> Self {
        match err {
            EvidenceError::MissingControlId => {
                ApiError::new(ErrorCode::MissingControlId, err.to_string())
            }
        }
    }
}

/// Create a not found error for a path
pub fn not_found(path: impl std::fmt::Display) -> ApiError {
    ApiError::new(ErrorCode::ResourceNotFound, format!("No route for {}", path))
}
