//! Expiration token parsing
//!
//! Callers describe a key's lifetime with a short token: a non-negative
//! integer followed by `d` (days), `w` (weeks) or `m` (months). A month is
//! always exactly 30 days.

use crate::utils::error::{KeygateError, Result};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: u64 = 30 * SECONDS_PER_DAY;

/// A parsed key lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryPeriod {
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl ExpiryPeriod {
    /// Parse a token such as `7d`, `2w` or `1m`
    pub fn parse(token: &str) -> Result<Self> {
        let invalid = || KeygateError::invalid_format(token);

        let mut chars = token.chars();
        let unit = chars.next_back().ok_or_else(invalid)?;
        let digits = chars.as_str();

        // u32::from_str accepts a leading '+', which is not a valid token
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let count: u32 = digits.parse().map_err(|_| invalid())?;

        match unit {
            'd' => Ok(ExpiryPeriod::Days(count)),
            'w' => Ok(ExpiryPeriod::Weeks(count)),
            'm' => Ok(ExpiryPeriod::Months(count)),
            _ => Err(invalid()),
        }
    }

    /// Length of the period in seconds
    pub fn as_seconds(&self) -> u64 {
        match *self {
            ExpiryPeriod::Days(n) => u64::from(n) * SECONDS_PER_DAY,
            ExpiryPeriod::Weeks(n) => u64::from(n) * SECONDS_PER_WEEK,
            ExpiryPeriod::Months(n) => u64::from(n) * SECONDS_PER_MONTH,
        }
    }

    /// Absolute deadline when starting the period at `now`
    pub fn deadline_from(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        Duration::try_seconds(self.as_seconds() as i64)
            .and_then(|duration| now.checked_add_signed(duration))
            .ok_or_else(|| KeygateError::invalid_format(self.to_string()))
    }
}

impl FromStr for ExpiryPeriod {
    type Err = KeygateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ExpiryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryPeriod::Days(n) => write!(f, "{}d", n),
            ExpiryPeriod::Weeks(n) => write!(f, "{}w", n),
            ExpiryPeriod::Months(n) => write!(f, "{}m", n),
        }
    }
}
