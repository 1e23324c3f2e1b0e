//! PostgreSQL implementation of the key store.
//!
//! Thin sqlx queries over the `api_keys` table. Every operation runs under
//! the configured timeout so a hung connection surfaces as
//! [`StoreError::Timeout`] rather than stalling the request.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::api_key::ApiKey;
use crate::store::{ApiKeyStore, StoreError};

/// Run a query future under `op_timeout`, mapping elapsed time to
/// [`StoreError::Timeout`].
async fn run_with_timeout<T, F>(op_timeout: Duration, fut: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(op_timeout, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(StoreError::Timeout(op_timeout)),
    }
}

/// Key store backed by a PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgApiKeyStore {
    pool: DbPool,
    op_timeout: Duration,
}

impl PgApiKeyStore {
    /// Create a store client over an existing pool.
    pub fn new(pool: DbPool, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    /// Run a query future under the per-operation timeout.
    async fn with_timeout<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        run_with_timeout(self.op_timeout, fut).await
    }
}

#[async_trait]
impl ApiKeyStore for PgApiKeyStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.with_timeout(async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }

    async fn list_keys(&self) -> Result<Vec<ApiKey>, StoreError> {
        self.with_timeout(
            sqlx::query_as::<_, ApiKey>(
                r#"
                SELECT id, name, key, "type", usage, created_at
                FROM api_keys
                ORDER BY created_at DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    async fn insert_key(
        &self,
        name: &str,
        secret: &str,
        environment: &str,
    ) -> Result<ApiKey, StoreError> {
        // usage starts at 0; id and created_at come from column defaults.
        // The UNIQUE constraint on key backstops generator collisions.
        self.with_timeout(
            sqlx::query_as::<_, ApiKey>(
                r#"
                INSERT INTO api_keys (name, key, "type", usage)
                VALUES ($1, $2, $3, 0)
                RETURNING id, name, key, "type", usage, created_at
                "#,
            )
            .bind(name)
            .bind(secret)
            .bind(environment)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn rename_key(&self, id: Uuid, name: &str) -> Result<Option<ApiKey>, StoreError> {
        self.with_timeout(
            sqlx::query_as::<_, ApiKey>(
                r#"
                UPDATE api_keys
                SET name = $2
                WHERE id = $1
                RETURNING id, name, key, "type", usage, created_at
                "#,
            )
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete_key(&self, id: Uuid) -> Result<(), StoreError> {
        // Idempotent: rows_affected of 0 is still success
        self.with_timeout(async {
            sqlx::query("DELETE FROM api_keys WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<ApiKey>, StoreError> {
        self.with_timeout(
            sqlx::query_as::<_, ApiKey>(
                r#"
                SELECT id, name, key, "type", usage, created_at
                FROM api_keys
                WHERE key = $1
                "#,
            )
            .bind(secret)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn record_usage(&self, id: Uuid) -> Result<(), StoreError> {
        // Single-statement increment: concurrent validations of the same
        // key cannot lose counts
        self.with_timeout(async {
            sqlx::query("UPDATE api_keys SET usage = usage + 1 WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hung_query_fails_with_timeout_error() {
        let result = run_with_timeout(
            Duration::from_millis(10),
            std::future::pending::<Result<(), sqlx::Error>>(),
        )
        .await;

        assert!(matches!(result, Err(StoreError::Timeout(_))));
    }

    #[tokio::test]
    async fn completed_query_passes_through() {
        let result =
            run_with_timeout(Duration::from_secs(1), async { Ok::<_, sqlx::Error>(7) }).await;

        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn query_error_is_not_reported_as_timeout() {
        let result = run_with_timeout(Duration::from_secs(1), async {
            Err::<(), _>(sqlx::Error::PoolTimedOut)
        })
        .await;

        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
