//! Key validation HTTP handler.
//!
//! `POST /validate-key` is the gate in front of the protected resource. Its
//! error payloads differ from the lifecycle endpoints: every body carries a
//! `valid` field so clients can branch on one flag regardless of outcome.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, error::AppError, models::api_key::ValidateKeyRequest,
    services::validation_service,
};

/// Validate a presented API key.
///
/// # Request Body
///
/// ```json
/// { "apiKey": "test_3f9c..." }
/// ```
///
/// # Responses
///
/// - **200** `{"valid": true, "type": "dev"}` - known key; its usage
///   counter has been incremented
/// - **200** `{"valid": false, "type": null}` - unknown key (a normal
///   negative result, not an error)
/// - **400** `{"valid": false, "error": ...}` - missing `apiKey` or
///   unparseable body
/// - **500** `{"valid": false, "error": ...}` - store lookup failed; never
///   reported as a plain `valid: false`, since that would silently deny a
///   possibly legitimate key
pub async fn validate_key(
    State(state): State<AppState>,
    payload: Result<Json<ValidateKeyRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "valid": false, "error": "Invalid request" })),
            )
                .into_response();
        }
    };

    match validation_service::validate_key(state.store.as_ref(), request.api_key.as_deref()).await
    {
        Ok(outcome) => Json(outcome).into_response(),
        Err(AppError::InvalidRequest(message)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "valid": false, "error": message })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "key validation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "valid": false, "error": "Error validating API key" })),
            )
                .into_response()
        }
    }
}
