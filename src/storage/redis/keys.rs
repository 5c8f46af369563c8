//! Key storage on Redis
//!
//! Each key is a plain Redis string holding its deadline in Unix
//! milliseconds, written with `SETEX` so Redis evicts it by itself.

use super::pool::RedisPool;
use crate::core::keys::KeyRecord;
use crate::storage::KeyStore;
use crate::utils::error::{KeygateError, Result};
use chrono::{DateTime, Duration, Utc};
use redis::AsyncCommands;
use tracing::debug;

/// Key store backed by Redis native expiry
#[derive(Debug, Clone)]
pub struct RedisKeyStore {
    pool: RedisPool,
}

impl RedisKeyStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

/// Value written for a key
pub(crate) fn encode_deadline(expires_at: DateTime<Utc>) -> String {
    expires_at.timestamp_millis().to_string()
}

/// Deadline stored under a key, if the value is one we wrote
pub(crate) fn decode_deadline(value: &str) -> Option<DateTime<Utc>> {
    value
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Redis refuses a zero TTL, so a zero-length lifetime is kept for one
/// second; the stored deadline still marks it expired immediately.
pub(crate) fn native_ttl(ttl_seconds: u64) -> u64 {
    ttl_seconds.max(1)
}

#[async_trait::async_trait]
impl KeyStore for RedisKeyStore {
    async fn get(&self, key: &str) -> Result<Option<KeyRecord>> {
        let mut conn = self.pool.get_connection();
        let value: Option<String> = conn.conn.get(key).await.map_err(KeygateError::Redis)?;

        let Some(value) = value else {
            return Ok(None);
        };

        if let Some(expires_at) = decode_deadline(&value) {
            return Ok(Some(KeyRecord::new(key, expires_at)));
        }

        // Entries written by other tools carry no deadline; fall back to the TTL
        let ttl: i64 = conn.conn.ttl(key).await.map_err(KeygateError::Redis)?;
        debug!("Key without stored deadline, ttl={}", ttl);
        match ttl {
            -2 => Ok(None),
            -1 => Err(KeygateError::storage(format!(
                "Key {} has no expiry in Redis",
                key
            ))),
            secs => Ok(Some(KeyRecord::new(
                key,
                Utc::now() + Duration::seconds(secs.max(0)),
            ))),
        }
    }

    async fn set(&self, record: &KeyRecord, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.pool.get_connection();
        let _: () = conn
            .conn
            .set_ex(
                &record.key,
                encode_deadline(record.expires_at),
                native_ttl(ttl_seconds),
            )
            .await
            .map_err(KeygateError::Redis)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.pool.get_connection();
        let removed: usize = conn.conn.del(key).await.map_err(KeygateError::Redis)?;
        Ok(removed > 0)
    }

    async fn sweep(&self, _now: DateTime<Utc>) -> Result<usize> {
        Ok(0)
    }

    async fn list(&self) -> Result<Option<Vec<KeyRecord>>> {
        Ok(None)
    }

    async fn health_check(&self) -> Result<()> {
        self.pool.health_check().await
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
