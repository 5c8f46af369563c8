//! Key storage for keygate
//!
//! The lifecycle manager only talks to the [`KeyStore`] trait, so the
//! in-process store and the Redis store are interchangeable.

/// In-process key store
pub mod memory;
/// Redis key store
pub mod redis;

use crate::config::{StorageConfig, StoreBackend};
use crate::core::keys::KeyRecord;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

pub use memory::MemoryKeyStore;
pub use self::redis::{RedisKeyStore, RedisPool};

/// Associates keys with their deadlines
#[async_trait::async_trait]
pub trait KeyStore: Send + Sync + std::fmt::Debug {
    /// Look up a key, whether or not its deadline has passed
    async fn get(&self, key: &str) -> Result<Option<KeyRecord>>;

    /// Store a key; `ttl_seconds` is the lifetime stores with native expiry
    /// should apply
    async fn set(&self, record: &KeyRecord, ttl_seconds: u64) -> Result<()>;

    /// Remove a key, returning whether it was present
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Remove every entry whose deadline is at or before `now`
    ///
    /// Stores that evict natively return 0 without scanning.
    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize>;

    /// All stored keys, or `None` when the store cannot enumerate cheaply
    async fn list(&self) -> Result<Option<Vec<KeyRecord>>>;

    /// Verify the store is reachable
    async fn health_check(&self) -> Result<()>;

    /// Short backend name used in logs and responses
    fn name(&self) -> &'static str;
}

/// Build the store selected by configuration
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn KeyStore>> {
    info!("Initializing {} key store", config.backend);

    let store: Arc<dyn KeyStore> = match config.backend {
        StoreBackend::Memory => Arc::new(MemoryKeyStore::new()),
        StoreBackend::Redis => {
            let pool = RedisPool::new(&config.redis).await?;
            Arc::new(RedisKeyStore::new(pool))
        }
    };

    info!("{} key store ready", store.name());
    Ok(store)
}
