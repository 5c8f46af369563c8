//! Server builder and run_server function

use crate::config::{Config, ConfigOverrides};
use crate::server::server::HttpServer;
use crate::utils::error::{KeygateError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| KeygateError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration and run the server until it stops
pub async fn run_server(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<()> {
    info!("🚀 Starting keygate");

    let config = Config::load_with(config_path, overrides).await?;

    let server = ServerBuilder::new().with_config(config.clone()).build().await?;
    info!(
        "🌐 Server starting at: http://{}",
        config.server().address()
    );
    info!("📋 API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /generate?expired=<N>d|w|m - Issue a key");
    info!("   GET  /check?key=<key> - Check a key");
    info!("   GET  /data - List live keys");

    server.start().await
}
