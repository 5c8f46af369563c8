//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod keygate;
pub mod notifications;
pub mod server;
pub mod storage;

pub use keygate::*;
pub use notifications::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default webhook delivery timeout in seconds
pub fn default_webhook_timeout() -> u64 {
    10
}
