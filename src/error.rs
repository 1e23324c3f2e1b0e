//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: Required request fields missing or malformed
/// - **Resource Errors**: Referenced key does not exist
/// - **Store Errors**: Underlying persistence failed or timed out
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was missing or invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// Referenced API key does not exist.
    ///
    /// Returns HTTP 404 Not Found. Raised by rename only; revoke is
    /// idempotent and succeeds whether or not the key existed.
    #[error("API key not found")]
    KeyNotFound,

    /// Store operation failed (query error, lost connection, timeout).
    ///
    /// Returns HTTP 500 Internal Server Error. The underlying fault is
    /// logged but never echoed to the client.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return a flat JSON body:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `KeyNotFound` → 404 Not Found
/// - `Store` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::KeyNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Store(err) => {
                // Secrets never appear in store errors, but raw driver
                // detail stays out of client payloads regardless
                tracing::error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
