//! Redis key store
//!
//! ## Module Structure
//!
//! - `pool` - Connection setup, authentication and health checks
//! - `keys` - The `KeyStore` implementation
//! - `tests` - Module tests

mod keys;
mod pool;

pub use keys::RedisKeyStore;
pub use pool::{RedisConnection, RedisPool};
