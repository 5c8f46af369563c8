//! Random key generation

use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};

/// Number of characters in every generated key
pub const KEY_LENGTH: usize = 32;

/// Generate an opaque access key
///
/// Characters are drawn uniformly from `[A-Za-z0-9]`. Uniqueness is not
/// checked against existing keys; at 62^32 possibilities a collision is
/// treated as impossible.
pub fn generate_key() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_LENGTH)
        .map(char::from)
        .collect()
}
