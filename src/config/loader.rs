//! Configuration loading from environment variables

use super::models::*;
use crate::utils::error::{KeygateError, Result};
use std::env;
use tracing::debug;

/// Values set explicitly by the environment or the command line
///
/// Every field is optional so that an override equal to a default still
/// replaces whatever the configuration file chose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
    pub backend: Option<StoreBackend>,
    pub redis_url: Option<String>,
    pub redis_token: Option<String>,
    pub webhook_url: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read overrides through an arbitrary variable lookup
    ///
    /// Unset and empty variables are both treated as absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from environment variables");
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = var("KEYGATE_PORT")
            .map(|port| port.parse::<u16>())
            .transpose()
            .map_err(|e| KeygateError::Config(format!("Invalid port: {}", e)))?;
        let workers = var("KEYGATE_WORKERS")
            .map(|workers| workers.parse::<usize>())
            .transpose()
            .map_err(|e| KeygateError::Config(format!("Invalid workers count: {}", e)))?;
        let backend = var("KEYGATE_STORE")
            .map(|backend| backend.parse::<StoreBackend>())
            .transpose()
            .map_err(KeygateError::Config)?;

        Ok(Self {
            host: var("KEYGATE_HOST"),
            port,
            workers,
            backend,
            redis_url: var("REDIS_URL"),
            redis_token: var("REDIS_TOKEN"),
            webhook_url: var("WEBHOOK_URL"),
        })
    }

    /// Layer `other` on top, its values winning
    pub fn or(self, other: Self) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            workers: other.workers.or(self.workers),
            backend: other.backend.or(self.backend),
            redis_url: other.redis_url.or(self.redis_url),
            redis_token: other.redis_token.or(self.redis_token),
            webhook_url: other.webhook_url.or(self.webhook_url),
        }
    }

    /// Write every set value into `config`
    pub fn apply(self, config: &mut KeygateConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = Some(workers);
        }
        if let Some(backend) = self.backend {
            config.storage.backend = backend;
        }
        if let Some(url) = self.redis_url {
            config.storage.redis.url = url;
        }
        if let Some(token) = self.redis_token {
            config.storage.redis.token = Some(token);
        }
        if let Some(url) = self.webhook_url {
            // Keep a timeout chosen in the file
            match &mut config.notifications.webhook {
                Some(webhook) => webhook.url = url,
                None => config.notifications.webhook = Some(WebhookConfig::new(url)),
            }
        }
    }
}

impl KeygateConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults with the variables found through `lookup` applied
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        ConfigOverrides::from_lookup(lookup)?.apply(&mut config);
        Ok(config)
    }
}
