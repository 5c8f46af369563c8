//! Utility modules for keygate
//!
//! - **error**: Error type and HTTP error rendering
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{KeygateError, Result};
pub use logging::{LogFormat, init_tracing};
