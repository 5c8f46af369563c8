//! Configuration management for keygate
//!
//! Configuration comes from an optional YAML file, overridden by environment
//! variables (a `.env` file is honoured by the binary), and is validated once
//! at startup so that missing credentials never surface per request.

pub mod loader;
pub mod models;

pub use loader::ConfigOverrides;
pub use models::*;

use crate::utils::error::{KeygateError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for keygate
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub keygate: KeygateConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            keygate: Self::read_file(path.as_ref()).await?,
        };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<KeygateConfig> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| KeygateError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| KeygateError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let keygate = KeygateConfig::from_env()?;
        let config = Self { keygate };

        config.validate()?;
        Ok(config)
    }

    /// Load the file (if any), then apply environment overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, ConfigOverrides::default()).await
    }

    /// Load the file (if any), apply environment overrides and then
    /// `overrides` on top, and validate the result once
    pub async fn load_with(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut keygate = match path {
            Some(path) => Self::read_file(path).await?,
            None => KeygateConfig::default(),
        };

        ConfigOverrides::from_env()?.or(overrides).apply(&mut keygate);

        let config = Self { keygate };
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.keygate.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.keygate.storage
    }

    /// Get notification configuration
    pub fn notifications(&self) -> &NotificationConfig {
        &self.keygate.notifications
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.keygate
            .server
            .validate()
            .map_err(|e| KeygateError::Config(format!("Server config error: {}", e)))?;

        self.keygate
            .storage
            .validate()
            .map_err(|e| KeygateError::Config(format!("Storage config error: {}", e)))?;

        self.keygate
            .notifications
            .validate()
            .map_err(|e| KeygateError::Config(format!("Notification config error: {}", e)))?;

        // The redis deployment always reports lifecycle events
        if self.keygate.storage.backend == StoreBackend::Redis
            && self.keygate.notifications.webhook.is_none()
        {
            return Err(KeygateError::Config(
                "Notification config error: WEBHOOK_URL is required for the redis store"
                    .to_string(),
            ));
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.keygate)
            .map_err(|e| KeygateError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
