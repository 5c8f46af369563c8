//! Notification configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Notification configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Webhook receiving key lifecycle events
    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}

impl NotificationConfig {
    /// Validate notification configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(webhook) = &self.webhook {
            webhook.validate()?;
        }
        Ok(())
    }
}

/// Webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Target URL
    pub url: String,
    /// Delivery timeout in seconds
    #[serde(default = "default_webhook_timeout")]
    pub timeout: u64,
}

impl WebhookConfig {
    /// Create a webhook configuration with the default timeout
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: default_webhook_timeout(),
        }
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), String> {
        let parsed =
            url::Url::parse(&self.url).map_err(|_| "WEBHOOK_URL is not a valid URL".to_string())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err("WEBHOOK_URL must use http or https".to_string());
        }
        if self.timeout == 0 {
            return Err("Webhook timeout cannot be 0".to_string());
        }
        Ok(())
    }
}
