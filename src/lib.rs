//! # keygate
//!
//! A small HTTP service that issues short-lived access keys and answers
//! whether a given key is still valid.
//!
//! ## Features
//!
//! - **Key issuing**: 32-character alphanumeric keys with a lifetime of
//!   `<N>d`, `<N>w` or `<N>m` (a month is 30 days)
//! - **Validity checks**: remaining lifetime in hours, expired keys removed
//!   on observation
//! - **Pluggable stores**: an in-process map, or Redis with native TTL
//! - **Notifications**: best-effort webhook embeds on issue and on expiry
//!
//! ## Embedding the key manager
//!
//! ```rust,no_run
//! use keygate::core::keys::KeyManager;
//! use keygate::storage::MemoryKeyStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> keygate::Result<()> {
//!     let manager = KeyManager::without_notifications(Arc::new(MemoryKeyStore::new()));
//!
//!     let issued = manager.generate(Some("7d")).await?;
//!     let checked = manager.check(Some(&issued.key)).await?;
//!     println!("{} is valid for {:.2} more hours", checked.key, checked.hours_left);
//!     Ok(())
//! }
//! ```
//!
//! ## Service mode
//!
//! ```rust,no_run
//! use keygate::{Config, Keygate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/keygate.yaml").await?;
//!     Keygate::new(config).await?.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod notifications;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use crate::core::keys::{ExpiryPeriod, KeyManager};
pub use utils::error::{KeygateError, Result};

use tracing::info;

/// A configured keygate service
pub struct Keygate {
    server: server::HttpServer,
}

impl Keygate {
    /// Connect the configured store and prepare the HTTP server
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating keygate instance");
        let server = server::HttpServer::new(&config).await?;
        Ok(Self { server })
    }

    /// Serve until the server stops
    pub async fn run(self) -> Result<()> {
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
