//! Key validation service - the system's access-control primitive.
//!
//! Validation is an exact-match lookup of the presented secret followed by
//! an atomic usage increment. An unknown secret is a normal negative
//! outcome, not an error; only input problems and store failures are errors.

use crate::error::AppError;
use crate::models::api_key::ValidateKeyResponse;
use crate::store::ApiKeyStore;

/// Check a presented secret against the store.
///
/// # Outcomes
///
/// - Missing/empty secret → `InvalidRequest`
/// - No matching key → `{ valid: false, type: null }`
/// - Match → `{ valid: true, type }` where `type` is the key's stored
///   environment class (the stored field is authoritative, never the
///   secret's prefix), and the key's usage counter is incremented by 1
///
/// The increment is best-effort: a failed counter write is logged and the
/// validation still reports success, since denying access over a
/// bookkeeping miss would be wrong. A failed *lookup* is a hard store
/// error and is surfaced, never folded into `valid: false`.
pub async fn validate_key(
    store: &dyn ApiKeyStore,
    presented: Option<&str>,
) -> Result<ValidateKeyResponse, AppError> {
    // Blank input is a request error; anything else is looked up verbatim
    // (case-sensitive, no trimming or normalization of the secret itself)
    let secret = match presented {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(AppError::InvalidRequest(
                "API key is required".to_string(),
            ));
        }
    };

    let Some(key) = store.find_by_secret(secret).await? else {
        return Ok(ValidateKeyResponse {
            valid: false,
            environment: None,
        });
    };

    if let Err(err) = store.record_usage(key.id).await {
        tracing::warn!(id = %key.id, error = %err, "failed to record key usage");
    }

    Ok(ValidateKeyResponse {
        valid: true,
        environment: Some(key.environment),
    })
}
