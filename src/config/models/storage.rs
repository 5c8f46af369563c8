//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which key store backs the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process map, lost on restart
    #[default]
    Memory,
    /// Remote Redis with native TTL eviction
    Redis,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Redis => write!(f, "redis"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            other => Err(format!("unknown store backend: {}", other)),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    #[serde(default)]
    pub backend: StoreBackend,
    /// Redis configuration, used when `backend` is `redis`
    #[serde(default)]
    pub redis: RedisConfig,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == StoreBackend::Redis {
            self.redis.validate()?;
        }
        Ok(())
    }
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL; must be `rediss://` since the token is always sent
    #[serde(default)]
    pub url: String,
    /// Auth token, sent as the connection password
    #[serde(default)]
    pub token: Option<String>,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: None,
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl RedisConfig {
    /// Validate Redis configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("REDIS_URL is required for the redis store".to_string());
        }
        let parsed =
            url::Url::parse(&self.url).map_err(|_| "REDIS_URL is not a valid URL".to_string())?;
        if self.token.as_deref().is_none_or(str::is_empty) {
            return Err("REDIS_TOKEN is required for the redis store".to_string());
        }
        if parsed.scheme() != "rediss" {
            return Err("REDIS_URL must use rediss:// when REDIS_TOKEN is set".to_string());
        }
        if self.connection_timeout == 0 {
            return Err("Redis connection timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
