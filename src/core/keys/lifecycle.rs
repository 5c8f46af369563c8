//! Key lifecycle management
//!
//! [`KeyManager`] ties together key generation, expiry parsing, the key
//! store and the notification sink behind `generate`, `check` and
//! `enumerate`.

use super::expiry::ExpiryPeriod;
use super::generator::generate_key;
use super::types::{CheckedKey, GeneratedKey, KeyListing, KeyRecord};
use crate::notifications::{KeyEvent, NoopSink, NotificationSink, notify_detached};
use crate::storage::KeyStore;
use crate::utils::error::{KeygateError, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Issues keys and answers validity checks
#[derive(Debug, Clone)]
pub struct KeyManager {
    store: Arc<dyn KeyStore>,
    sink: Arc<dyn NotificationSink>,
}

impl KeyManager {
    pub fn new(store: Arc<dyn KeyStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Manager that sends no notifications
    pub fn without_notifications(store: Arc<dyn KeyStore>) -> Self {
        Self::new(store, Arc::new(NoopSink))
    }

    pub fn store(&self) -> &Arc<dyn KeyStore> {
        &self.store
    }

    /// Issue a new key living for the period described by `expired`
    pub async fn generate(&self, expired: Option<&str>) -> Result<GeneratedKey> {
        let token = expired
            .filter(|token| !token.is_empty())
            .ok_or_else(|| KeygateError::missing_parameter("expiration"))?;
        let period = ExpiryPeriod::parse(token)?;

        let now = Utc::now();
        let expires_at = period.deadline_from(now)?;
        let record = KeyRecord::new(generate_key(), expires_at);

        self.store.set(&record, period.as_seconds()).await?;
        info!(period = %period, expires_at = %expires_at, "Generated key");

        notify_detached(
            Arc::clone(&self.sink),
            KeyEvent::Generated {
                key: record.key.clone(),
                expires_at,
            },
        );

        Ok(GeneratedKey {
            hours_left: record.hours_left_at(now),
            key: record.key,
            expires_at,
        })
    }

    /// Report whether `key` is still valid
    ///
    /// The record is read before the sweep so that a key which has just
    /// expired is reported as expired once, rather than vanishing into an
    /// "invalid key" answer. It is deleted here and any later check reports
    /// it as unknown.
    pub async fn check(&self, key: Option<&str>) -> Result<CheckedKey> {
        let key = key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| KeygateError::missing_parameter("key"))?;

        let record = self.store.get(key).await?;
        let now = Utc::now();
        self.store.sweep(now).await?;

        let Some(record) = record else {
            debug!("Checked unknown key");
            return Err(KeygateError::not_found(key));
        };

        if record.is_expired_at(now) {
            self.store.delete(key).await?;
            info!(expires_at = %record.expires_at, "Checked expired key");

            notify_detached(
                Arc::clone(&self.sink),
                KeyEvent::Expired {
                    key: key.to_string(),
                    checked_at: now,
                },
            );
            return Err(KeygateError::expired(key));
        }

        Ok(CheckedKey {
            hours_left: record.hours_left_at(now),
            key: record.key,
            expires_at: record.expires_at,
        })
    }

    /// List every live key with its deadline
    pub async fn enumerate(&self) -> Result<KeyListing> {
        let now = Utc::now();
        self.store.sweep(now).await?;

        let records = self.store.list().await?.ok_or_else(|| {
            KeygateError::unsupported(format!(
                "Key listing is not supported by the {} store",
                self.store.name()
            ))
        })?;

        // The sweep and the listing are not atomic; filter again
        let keys = records
            .into_iter()
            .filter(|record| !record.is_expired_at(now))
            .map(|record| (record.key, record.expires_at))
            .collect();

        Ok(KeyListing { keys })
    }
}
