//! Access key lifecycle
//!
//! - `generator` - random key strings
//! - `expiry` - `<N>d` / `<N>w` / `<N>m` lifetime tokens
//! - `lifecycle` - the `KeyManager` orchestrating store and notifications
//! - `types` - records and operation results

pub mod expiry;
pub mod generator;
pub mod lifecycle;
pub mod types;

pub use expiry::ExpiryPeriod;
pub use generator::{KEY_LENGTH, generate_key};
pub use lifecycle::KeyManager;
pub use types::{
    CheckedKey, GeneratedKey, KeyListing, KeyRecord, LISTING_TIME_FORMAT, format_hours,
};
