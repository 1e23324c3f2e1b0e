//! In-memory ApiKeyStore double shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use apikey_dashboard_server::models::api_key::ApiKey;
use apikey_dashboard_server::store::{ApiKeyStore, StoreError};

/// Vec-backed key store. Keys are held in insertion order; `list_keys`
/// returns them reversed, matching the newest-first contract. Like the
/// real table, inserting a duplicate secret is a store error.
///
/// Two failure switches cover the error paths without a database:
/// `fail_all` makes every operation fail, `fail_usage` only the counter
/// increment (to exercise the best-effort increment behavior).
#[derive(Default)]
pub struct MemoryStore {
    keys: Mutex<Vec<ApiKey>>,
    fail_all: AtomicBool,
    fail_usage: AtomicBool,
}

impl MemoryStore {
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_usage(&self, fail: bool) {
        self.fail_usage.store(fail, Ordering::SeqCst);
    }

    pub fn usage_of(&self, id: Uuid) -> Option<i64> {
        self.keys
            .lock()
            .unwrap()
            .iter()
            .find(|k| k.id == id)
            .map(|k| k.usage_count)
    }

    fn unavailable() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    fn unique_violation() -> StoreError {
        StoreError::Database(sqlx::Error::Protocol(
            "duplicate key value violates unique constraint \"api_keys_key_key\"".to_string(),
        ))
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl ApiKeyStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn list_keys(&self) -> Result<Vec<ApiKey>, StoreError> {
        self.check_available()?;
        let keys = self.keys.lock().unwrap();
        Ok(keys.iter().rev().cloned().collect())
    }

    async fn insert_key(
        &self,
        name: &str,
        secret: &str,
        environment: &str,
    ) -> Result<ApiKey, StoreError> {
        self.check_available()?;
        let mut keys = self.keys.lock().unwrap();
        if keys.iter().any(|k| k.secret == secret) {
            return Err(Self::unique_violation());
        }
        let key = ApiKey {
            id: Uuid::new_v4(),
            name: name.to_string(),
            secret: secret.to_string(),
            environment: environment.to_string(),
            usage_count: 0,
            created_at: Utc::now(),
        };
        keys.push(key.clone());
        Ok(key)
    }

    async fn rename_key(&self, id: Uuid, name: &str) -> Result<Option<ApiKey>, StoreError> {
        self.check_available()?;
        let mut keys = self.keys.lock().unwrap();
        Ok(keys.iter_mut().find(|k| k.id == id).map(|key| {
            key.name = name.to_string();
            key.clone()
        }))
    }

    async fn delete_key(&self, id: Uuid) -> Result<(), StoreError> {
        self.check_available()?;
        self.keys.lock().unwrap().retain(|k| k.id != id);
        Ok(())
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<ApiKey>, StoreError> {
        self.check_available()?;
        let keys = self.keys.lock().unwrap();
        Ok(keys.iter().find(|k| k.secret == secret).cloned())
    }

    async fn record_usage(&self, id: Uuid) -> Result<(), StoreError> {
        self.check_available()?;
        if self.fail_usage.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let mut keys = self.keys.lock().unwrap();
        if let Some(key) = keys.iter_mut().find(|k| k.id == id) {
            key.usage_count += 1;
        }
        Ok(())
    }
}
