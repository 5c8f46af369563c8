//! Error types for keygate

use thiserror::Error;

/// Result type alias for keygate
pub type Result<T> = std::result::Result<T, KeygateError>;

/// Main error type for keygate
///
/// The key-outcome variants (`MissingParameter`, `InvalidFormat`, `NotFound`,
/// `Expired`, `Unsupported`) are reported to HTTP callers as regular `200 OK`
/// bodies carrying a `status` field. Everything else is a service fault.
#[derive(Error, Debug)]
pub enum KeygateError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redis errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required query parameter was absent or empty
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// The expiration token could not be parsed
    #[error("Invalid expiration format: {0}")]
    InvalidFormat(String),

    /// The key is not present in the store
    #[error("Invalid key: {0}")]
    NotFound(String),

    /// The key exists but its deadline has passed
    #[error("Key expired: {0}")]
    Expired(String),

    /// The configured store cannot perform the requested operation
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Storage errors not covered by a backend-specific variant
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl KeygateError {
    /// Whether this error describes the outcome of a key operation rather
    /// than a fault of the service itself
    pub fn is_key_outcome(&self) -> bool {
        matches!(
            self,
            KeygateError::MissingParameter(_)
                | KeygateError::InvalidFormat(_)
                | KeygateError::NotFound(_)
                | KeygateError::Expired(_)
                | KeygateError::Unsupported(_)
        )
    }
}
