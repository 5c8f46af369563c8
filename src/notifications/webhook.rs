//! Discord-style webhook sink

use super::{KeyEvent, NotificationSink};
use crate::config::WebhookConfig;
use crate::utils::error::{KeygateError, Result};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use std::time::Duration;

const GENERATED_COLOR: u32 = 0x00FF00;
const EXPIRED_COLOR: u32 = 0xFF0000;

/// Posts key events as embeds to a webhook URL
#[derive(Debug, Clone)]
pub struct WebhookSink {
    webhook_url: String,
    client: reqwest::Client,
}

impl WebhookSink {
    /// Create a new webhook sink
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(KeygateError::HttpClient)?;

        Ok(Self {
            webhook_url: config.url.clone(),
            client,
        })
    }

    /// Build the webhook body for `event`
    pub fn payload(event: &KeyEvent, sent_at: DateTime<Utc>) -> Value {
        let (title, description, color) = match event {
            KeyEvent::Generated { .. } => (
                "✅ Key Generated",
                "A new key has been created!",
                GENERATED_COLOR,
            ),
            KeyEvent::Expired { .. } => (
                "❌ Key Expired",
                "A key was checked but has expired.",
                EXPIRED_COLOR,
            ),
        };
        let unix = event.instant().timestamp();

        json!({
            "embeds": [{
                "title": title,
                "description": description,
                "color": color,
                "fields": [
                    {
                        "name": "🔑 Key",
                        "value": format!("```{}```", event.key()),
                        "inline": false
                    },
                    {
                        "name": "⏳ Expired",
                        "value": format!("<t:{unix}:F> (<t:{unix}:R>)"),
                        "inline": false
                    }
                ],
                "footer": { "text": "Key System Logs" },
                "timestamp": sent_at.to_rfc3339()
            }]
        })
    }
}

#[async_trait::async_trait]
impl NotificationSink for WebhookSink {
    async fn send(&self, event: &KeyEvent) -> Result<()> {
        let payload = Self::payload(event, Utc::now());

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                KeygateError::notification(format!("Failed to send webhook notification: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(KeygateError::notification(format!(
                "Webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}
