//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Everything the service reads at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeygateConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Key store settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,
}
