//! HTTP route modules
//!
//! - `keys` - `/generate`, `/check` and `/data`
//! - `health` - `/health`

pub mod health;
pub mod keys;
