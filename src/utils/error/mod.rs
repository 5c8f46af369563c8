//! Error handling for keygate
//!
//! This module defines the error type used throughout the service and how it
//! is rendered to HTTP callers.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{KeygateError, Result};
