//! Key store: the data-access seam for issued API keys.
//!
//! All durable state lives behind the [`ApiKeyStore`] trait. Services and
//! handlers depend on the trait only; the Postgres implementation is
//! constructed in `main` and injected, so tests can substitute an in-memory
//! double without touching the HTTP or service layers.

pub mod postgres;

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::api_key::ApiKey;

/// Failure of an underlying store operation.
///
/// "No row matched" is NOT a store error; lookups return `Option` and the
/// caller decides what absence means. This type only covers the store being
/// unable to answer at all.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Operation exceeded the configured store timeout.
    ///
    /// Converts a hung store call into a reportable failure instead of
    /// blocking the request indefinitely.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Persistent record of issued API keys.
///
/// The store enforces uniqueness of `secret` and assigns `id` and
/// `created_at` on insert. Counter updates must be atomic increments, not
/// read-modify-write, so concurrent validations of the same key never lose
/// counts.
#[async_trait]
pub trait ApiKeyStore: Send + Sync {
    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All keys, newest `created_at` first.
    async fn list_keys(&self) -> Result<Vec<ApiKey>, StoreError>;

    /// Insert a new key with `usage` 0; returns the full stored record.
    async fn insert_key(
        &self,
        name: &str,
        secret: &str,
        environment: &str,
    ) -> Result<ApiKey, StoreError>;

    /// Update a key's name. Returns `None` if no key has that id.
    async fn rename_key(&self, id: Uuid, name: &str) -> Result<Option<ApiKey>, StoreError>;

    /// Hard-delete a key. Succeeds whether or not the key existed.
    async fn delete_key(&self, id: Uuid) -> Result<(), StoreError>;

    /// Exact-match lookup by secret (case-sensitive, no normalization).
    async fn find_by_secret(&self, secret: &str) -> Result<Option<ApiKey>, StoreError>;

    /// Atomically add 1 to a key's usage counter.
    async fn record_usage(&self, id: Uuid) -> Result<(), StoreError>;
}
