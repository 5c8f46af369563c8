//! In-process key store
//!
//! Entries live in a `DashMap` and disappear on restart. Nothing expires on
//! its own: expired entries are removed by [`KeyStore::sweep`] or by the
//! lifecycle manager when it observes them.

use super::KeyStore;
use crate::core::keys::KeyRecord;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

/// Key store backed by a concurrent in-process map
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    entries: DashMap<String, DateTime<Utc>>,
}

impl MemoryKeyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyStore for MemoryKeyStore {
    async fn get(&self, key: &str) -> Result<Option<KeyRecord>> {
        Ok(self
            .entries
            .get(key)
            .map(|entry| KeyRecord::new(entry.key().clone(), *entry.value())))
    }

    async fn set(&self, record: &KeyRecord, _ttl_seconds: u64) -> Result<()> {
        self.entries.insert(record.key.clone(), record.expires_at);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn sweep(&self, now: DateTime<Utc>) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|_, expires_at| *expires_at > now);
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            debug!("Swept {} expired keys", removed);
        }
        Ok(removed)
    }

    async fn list(&self) -> Result<Option<Vec<KeyRecord>>> {
        Ok(Some(
            self.entries
                .iter()
                .map(|entry| KeyRecord::new(entry.key().clone(), *entry.value()))
                .collect(),
        ))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
