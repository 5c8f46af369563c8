//! Redis connection management
//!
//! This module provides Redis connectivity, token authentication and health checks.

use crate::config::RedisConfig;
use crate::utils::error::{KeygateError, Result};
use redis::{Client, ConnectionAddr, ConnectionInfo, IntoConnectionInfo, aio::MultiplexedConnection};
use std::time::Duration;
use tracing::{debug, info};

/// Shared Redis connection
#[derive(Clone)]
pub struct RedisPool {
    /// Multiplexed connection, cheap to clone per request
    pub(crate) connection_manager: MultiplexedConnection,
    /// Configuration
    pub(crate) config: RedisConfig,
}

impl std::fmt::Debug for RedisPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisPool")
            .field("url", &Self::sanitize_url(&self.config.url))
            .finish()
    }
}

/// Redis connection wrapper
pub struct RedisConnection {
    pub(crate) conn: MultiplexedConnection,
}

impl RedisPool {
    /// Connect to Redis, authenticating with the configured token
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating Redis connection");
        debug!("Redis URL: {}", Self::sanitize_url(&config.url));

        let connection_info = Self::connection_info(config)?;
        let client = Client::open(connection_info).map_err(KeygateError::Redis)?;

        let connection_manager = tokio::time::timeout(
            Duration::from_secs(config.connection_timeout),
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            KeygateError::storage(format!(
                "Timed out connecting to Redis after {}s",
                config.connection_timeout
            ))
        })?
        .map_err(KeygateError::Redis)?;

        info!("Redis connection created successfully");
        Ok(Self {
            connection_manager,
            config: config.clone(),
        })
    }

    /// Resolve the URL, attaching the token as the connection password
    ///
    /// A token is only ever sent over TLS, so it requires a `rediss://` URL.
    pub(crate) fn connection_info(config: &RedisConfig) -> Result<ConnectionInfo> {
        let mut connection_info = config
            .url
            .as_str()
            .into_connection_info()
            .map_err(KeygateError::Redis)?;

        if let Some(token) = &config.token {
            if !matches!(connection_info.addr, ConnectionAddr::TcpTls { .. }) {
                return Err(KeygateError::config(
                    "REDIS_URL must use rediss:// when REDIS_TOKEN is set",
                ));
            }
            connection_info.redis.password = Some(token.clone());
        }

        Ok(connection_info)
    }

    /// Get a connection handle
    pub fn get_connection(&self) -> RedisConnection {
        RedisConnection {
            conn: self.connection_manager.clone(),
        }
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing Redis health check");

        let mut conn = self.get_connection();
        let _: String = redis::cmd("PING")
            .query_async(&mut conn.conn)
            .await
            .map_err(KeygateError::Redis)?;

        debug!("Redis health check passed");
        Ok(())
    }

    /// Sanitize Redis URL for logging (hide password)
    pub(crate) fn sanitize_url(url: &str) -> String {
        if let Ok(parsed) = url::Url::parse(url) {
            let mut sanitized = parsed.clone();
            if sanitized.password().is_some() {
                let _ = sanitized.set_password(Some("***"));
            }
            sanitized.to_string()
        } else {
            "invalid_url".to_string()
        }
    }
}
