//! Key lifecycle HTTP handlers.
//!
//! This module implements the dashboard-facing API endpoints:
//! - GET /apikeys - List all keys, newest first
//! - POST /apikeys - Mint a new key
//! - PATCH /apikeys - Rename a key
//! - DELETE /apikeys?id= - Revoke a key
//!
//! Bodies are extracted as `Result<Json<_>, JsonRejection>` so a missing or
//! unparseable body becomes the same flat `{"error": ...}` payload as a
//! failed field validation, instead of axum's plain-text rejection.

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::AppError,
    models::api_key::{ApiKey, CreateKeyRequest, DeleteKeyParams, UpdateKeyRequest},
    services::key_service,
};

/// Unwrap an extracted JSON body, mapping rejections to `InvalidRequest`.
fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| AppError::InvalidRequest("Invalid request body".to_string()))
}

/// List all API keys.
///
/// # Endpoint
///
/// `GET /apikeys`
///
/// # Response
///
/// - **Success (200 OK)**: Array of key records, newest first (may be empty)
/// - **Error (500)**: Store failure
///
/// ```json
/// [
///   {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "ci-key",
///     "key": "test_3f9c...",
///     "type": "dev",
///     "usage": 4,
///     "created_at": "2025-12-20T10:00:00Z"
///   }
/// ]
/// ```
///
/// Secrets are returned in plaintext; the dashboard renders and copies them.
pub async fn list_keys(State(state): State<AppState>) -> Result<Json<Vec<ApiKey>>, AppError> {
    let keys = key_service::list_keys(state.store.as_ref()).await?;

    Ok(Json(keys))
}

/// Mint a new API key.
///
/// # Endpoint
///
/// `POST /apikeys`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "ci-key",
///   "type": "dev"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The full created record, including the plaintext
///   `key` (`live_` prefix for `prod`, `test_` otherwise) and `usage: 0`
/// - **Error (400)**: `name` or `type` missing/empty, or unparseable body
/// - **Error (500)**: Store failure
pub async fn create_key(
    State(state): State<AppState>,
    payload: Result<Json<CreateKeyRequest>, JsonRejection>,
) -> Result<Json<ApiKey>, AppError> {
    let request = require_body(payload)?;

    let key = key_service::create_key(state.store.as_ref(), request).await?;

    Ok(Json(key))
}

/// Rename an API key.
///
/// # Endpoint
///
/// `PATCH /apikeys`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "renamed-key"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The updated record
/// - **Error (400)**: `id` or `name` missing/empty
/// - **Error (404)**: No key with that id
/// - **Error (500)**: Store failure
pub async fn update_key(
    State(state): State<AppState>,
    payload: Result<Json<UpdateKeyRequest>, JsonRejection>,
) -> Result<Json<ApiKey>, AppError> {
    let request = require_body(payload)?;

    let key = key_service::rename_key(state.store.as_ref(), request).await?;

    Ok(Json(key))
}

/// Revoke an API key.
///
/// # Endpoint
///
/// `DELETE /apikeys?id=<uuid>`
///
/// # Response
///
/// - **Success (200 OK)**: `{"success": true}` whether or not the id
///   matched a record (idempotent delete)
/// - **Error (400)**: `id` missing or not a UUID
/// - **Error (500)**: Store failure
pub async fn delete_key(
    State(state): State<AppState>,
    Query(params): Query<DeleteKeyParams>,
) -> Result<Json<Value>, AppError> {
    key_service::revoke_key(state.store.as_ref(), params).await?;

    Ok(Json(json!({ "success": true })))
}
