//! Key lifecycle notifications
//!
//! Notifications are best-effort. [`notify_detached`] hands the event to a
//! background task and returns immediately; a failed delivery is logged and
//! dropped, and never changes the outcome of the request that caused it.

pub mod webhook;

use crate::config::NotificationConfig;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub use webhook::WebhookSink;

/// Something that happened to a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A key was issued
    Generated {
        key: String,
        expires_at: DateTime<Utc>,
    },
    /// A key was checked after its deadline
    Expired {
        key: String,
        checked_at: DateTime<Utc>,
    },
}

impl KeyEvent {
    pub fn key(&self) -> &str {
        match self {
            KeyEvent::Generated { key, .. } | KeyEvent::Expired { key, .. } => key,
        }
    }

    /// The instant shown next to the key: its deadline for new keys, the
    /// moment of the check for expired ones
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            KeyEvent::Generated { expires_at, .. } => *expires_at,
            KeyEvent::Expired { checked_at, .. } => *checked_at,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            KeyEvent::Generated { .. } => "generated",
            KeyEvent::Expired { .. } => "expired",
        }
    }
}

/// Notification sink trait
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync + std::fmt::Debug {
    /// Deliver one event
    async fn send(&self, event: &KeyEvent) -> Result<()>;

    /// Get sink name
    fn name(&self) -> &str;
}

/// Sink that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

#[async_trait::async_trait]
impl NotificationSink for NoopSink {
    async fn send(&self, event: &KeyEvent) -> Result<()> {
        debug!("Dropping {} event, no notification sink configured", event.kind());
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// Build the sink selected by configuration
pub fn create_sink(config: &NotificationConfig) -> Result<Arc<dyn NotificationSink>> {
    match &config.webhook {
        Some(webhook) => Ok(Arc::new(WebhookSink::new(webhook)?)),
        None => Ok(Arc::new(NoopSink)),
    }
}

/// Deliver `event` on a background task
pub fn notify_detached(sink: Arc<dyn NotificationSink>, event: KeyEvent) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = sink.send(&event).await {
            warn!(
                sink = sink.name(),
                event = event.kind(),
                error = %e,
                "Failed to deliver key notification"
            );
        }
    })
}
