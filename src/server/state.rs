//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::keys::KeyManager;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Key lifecycle manager
    pub keys: KeyManager,
    /// When the state was built
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, keys: KeyManager) -> Self {
        Self {
            config: Arc::new(config),
            keys,
            started_at: Utc::now(),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
