//! API key data model and API request/response types.
//!
//! This module defines:
//! - `ApiKey`: Database entity representing an issued key
//! - Request bodies for create/rename/revoke/validate
//! - `ValidateKeyResponse`: the validation endpoint's response body
//!
//! # Wire Names
//!
//! The dashboard client predates this service, so the JSON field names are
//! fixed: `key` carries the secret, `type` the environment class, and
//! `usage` the validation counter. Serde renames keep the Rust names honest
//! without breaking the contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an API key record from the database.
///
/// # Database Table
///
/// Maps to the `api_keys` table with columns:
/// - `id`: Unique identifier (UUID), assigned by the store, never reused
/// - `name`: Human-readable label, the only mutable field besides usage
/// - `key`: The secret itself, `{live|test}_{48 hex}`, globally unique
/// - `type`: Environment class (`prod` or `dev`), immutable after creation
/// - `usage`: Count of successful validations, only ever incremented
/// - `created_at`: When the key was minted
///
/// # Secret Storage
///
/// Secrets are stored and returned in plaintext: the dashboard lists them
/// and the validation endpoint matches on the exact string. The `type`
/// column, not the secret's prefix, is authoritative for validation
/// responses.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ApiKey {
    /// Unique identifier for this API key
    pub id: Uuid,

    /// Human-readable label chosen by the dashboard user
    pub name: String,

    /// The key material presented by callers
    #[serde(rename = "key")]
    #[sqlx(rename = "key")]
    pub secret: String,

    /// Environment class: `prod` keys carry a `live_` secret prefix,
    /// everything else `test_`
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub environment: String,

    /// Number of successful validations of this key
    #[serde(rename = "usage")]
    #[sqlx(rename = "usage")]
    pub usage_count: i64,

    /// Timestamp when this API key was created
    pub created_at: DateTime<Utc>,
}

/// Request body for minting a new API key.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "ci-key",
///   "type": "dev"
/// }
/// ```
///
/// # Validation
///
/// Both fields are required and must be non-empty; the service rejects the
/// request with 400 otherwise. Fields are optional here so missing values
/// surface as a JSON error body rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateKeyRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "type")]
    pub environment: Option<String>,
}

/// Request body for renaming an existing API key.
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "renamed-key"
/// }
/// ```
///
/// Only the name can change; secret, type, and usage are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateKeyRequest {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters for `DELETE /apikeys?id=`.
#[derive(Debug, Deserialize)]
pub struct DeleteKeyParams {
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for the validation endpoint.
///
/// ```json
/// { "apiKey": "test_3f9c..." }
/// ```
#[derive(Debug, Deserialize)]
pub struct ValidateKeyRequest {
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<String>,
}

/// Response body for the validation endpoint.
///
/// # JSON Examples
///
/// ```json
/// { "valid": true, "type": "dev" }
/// { "valid": false, "type": null }
/// ```
///
/// An unknown secret is a normal negative result, not an error: the caller
/// still receives 200 with `valid: false`. `type` echoes the stored
/// environment class of the matched key and is always present (null on a
/// miss) so clients never have to sniff the secret's prefix.
#[derive(Debug, Serialize)]
pub struct ValidateKeyResponse {
    pub valid: bool,

    #[serde(rename = "type")]
    pub environment: Option<String>,
}
