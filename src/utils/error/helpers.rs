//! Helper functions for creating specific error types

use super::types::KeygateError;

impl KeygateError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn missing_parameter<S: Into<String>>(name: S) -> Self {
        Self::MissingParameter(name.into())
    }

    pub fn invalid_format<S: Into<String>>(token: S) -> Self {
        Self::InvalidFormat(token.into())
    }

    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Self::NotFound(key.into())
    }

    pub fn expired<S: Into<String>>(key: S) -> Self {
        Self::Expired(key.into())
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::Notification(message.into())
    }

    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
