//! Key lifecycle service - issuing, listing, renaming, and revoking keys.
//!
//! All four operations delegate persistence to the [`ApiKeyStore`]; this
//! module owns input validation and the generation policy.

use uuid::Uuid;

use crate::error::AppError;
use crate::keygen;
use crate::models::api_key::{ApiKey, CreateKeyRequest, DeleteKeyParams, UpdateKeyRequest};
use crate::store::ApiKeyStore;

/// Require a field to be present and non-blank.
///
/// Trimming applies to the emptiness check only; the value itself passes
/// through verbatim, so a padded name is stored exactly as sent.
fn require<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::InvalidRequest(format!("{field} is required"))),
    }
}

/// Parse an id field into a UUID, rejecting missing or malformed values.
fn require_id(value: &Option<String>, field: &str) -> Result<Uuid, AppError> {
    require(value, field)?
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidRequest(format!("{field} must be a valid UUID")))
}

/// List all issued keys, newest first.
pub async fn list_keys(store: &dyn ApiKeyStore) -> Result<Vec<ApiKey>, AppError> {
    Ok(store.list_keys().await?)
}

/// Mint a new API key.
///
/// Validates that `name` and `type` are present and non-empty, generates
/// fresh secret material for the environment class, and inserts the record
/// with `usage` 0.
///
/// The returned record includes the plaintext secret; this and the list
/// endpoint are the only places it is ever handed out, so the dashboard
/// captures it directly from the create response.
pub async fn create_key(
    store: &dyn ApiKeyStore,
    request: CreateKeyRequest,
) -> Result<ApiKey, AppError> {
    let name = require(&request.name, "name")?;
    let environment = require(&request.environment, "type")?;

    let secret = keygen::generate(environment);

    let key = store.insert_key(name, &secret, environment).await?;

    tracing::info!(id = %key.id, environment = %key.environment, "API key created");

    Ok(key)
}

/// Rename an existing key.
///
/// Only the label changes; secret, environment class, and usage counter are
/// never touched by this path.
///
/// # Errors
///
/// - `InvalidRequest` if `id` or `name` is missing or empty
/// - `KeyNotFound` if no key has the given id
pub async fn rename_key(
    store: &dyn ApiKeyStore,
    request: UpdateKeyRequest,
) -> Result<ApiKey, AppError> {
    let id = require_id(&request.id, "id")?;
    let name = require(&request.name, "name")?;

    store
        .rename_key(id, name)
        .await?
        .ok_or(AppError::KeyNotFound)
}

/// Revoke a key by hard delete.
///
/// Idempotent: revoking an id that no longer exists (or never did) is still
/// success, so the dashboard can retry without special-casing.
pub async fn revoke_key(store: &dyn ApiKeyStore, params: DeleteKeyParams) -> Result<(), AppError> {
    let id = require_id(&params.id, "id")?;

    store.delete_key(id).await?;

    tracing::info!(%id, "API key revoked");

    Ok(())
}
