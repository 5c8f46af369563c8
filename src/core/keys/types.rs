//! Key lifecycle data types

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Timestamp layout used when listing keys
pub const LISTING_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A key and the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub key: String,
    pub expires_at: DateTime<Utc>,
}

impl KeyRecord {
    pub fn new(key: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            expires_at,
        }
    }

    /// A key is dead once `now` reaches its deadline
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Remaining lifetime in hours, never negative
    pub fn hours_left_at(&self, now: DateTime<Utc>) -> f64 {
        hours_between(now, self.expires_at)
    }
}

/// Result of a successful `generate`
#[derive(Debug, Clone)]
pub struct GeneratedKey {
    pub key: String,
    pub expires_at: DateTime<Utc>,
    pub hours_left: f64,
}

/// Result of a successful `check`
#[derive(Debug, Clone)]
pub struct CheckedKey {
    pub key: String,
    pub expires_at: DateTime<Utc>,
    pub hours_left: f64,
}

/// Live keys and their deadlines
#[derive(Debug, Clone, Default)]
pub struct KeyListing {
    pub keys: BTreeMap<String, DateTime<Utc>>,
}

impl KeyListing {
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// Deadlines rendered as `YYYY-MM-DD HH:MM:SS` (UTC)
    pub fn formatted(&self) -> BTreeMap<String, String> {
        self.keys
            .iter()
            .map(|(key, expires_at)| {
                (key.clone(), expires_at.format(LISTING_TIME_FORMAT).to_string())
            })
            .collect()
    }
}

/// Render an hour count the way responses report it, e.g. `24.00 hours`
pub fn format_hours(hours: f64) -> String {
    format!("{:.2} hours", hours)
}

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds().max(0);
    millis as f64 / 3_600_000.0
}
