//! # API Errors
//!
//! Every failure leaves the server as the same JSON shape:
//!
//! ```json
//! {"success": false, "error": 404, "message": "Not found"}
//! ```
//!
//! The detail carried by a variant is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quiz::QuizError;
use crate::store::StoreError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed id, page or body
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Nothing to show
    #[error("Not found")]
    NotFound,

    /// Well-formed body with unusable content
    #[error("Unprocessable request: {0}")]
    Unprocessable(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; the write has been rolled back
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to clients
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Invalid request",
            ApiError::NotFound => "Not found",
            ApiError::Unprocessable(_) => "Unprocessable error",
            ApiError::Store(_) => "Unexpected server error",
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        ApiError::Unprocessable(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.public_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(err) => tracing::error!(error = %err, "store operation failed"),
            other => tracing::debug!(error = %other, "request rejected"),
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
