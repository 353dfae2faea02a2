//! Order numbers and how they are generated.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a generated order number.
pub const ORDER_NUMBER_LEN: usize = TIMESTAMP_LEN + SUFFIX_LEN;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const TIMESTAMP_LEN: usize = 14;
const SUFFIX_LEN: usize = 6;
const SUFFIX_RANGE: u32 = 1_000_000;

/// Customer-facing order identifier.
///
/// Generated numbers are 20 ASCII digits: a `yyyyMMddHHmmss` timestamp
/// followed by a zero-padded 6-digit random suffix. Lookups accept any text
/// and match it exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Wraps an existing order number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Builds the order number for a creation time and suffix.
    ///
    /// Suffixes outside `0..1_000_000` are reduced into range.
    pub fn from_parts(created_at: DateTime<Utc>, suffix: u32) -> Self {
        Self(format!(
            "{}{:0width$}",
            created_at.format(TIMESTAMP_FORMAT),
            suffix % SUFFIX_RANGE,
            width = SUFFIX_LEN
        ))
    }

    /// Returns the order number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `yyyyMMddHHmmss` prefix, if the number is long enough.
    pub fn timestamp_part(&self) -> Option<&str> {
        self.0.get(..TIMESTAMP_LEN)
    }

    /// Returns true if this has the shape of a generated number.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == ORDER_NUMBER_LEN && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of order numbers for new orders.
///
/// Implementations are not required to be collision free; the repository
/// rejects duplicates on insert.
pub trait OrderNumberGenerator: Send + Sync {
    /// Generates the number for an order created at `created_at`.
    fn generate(&self, created_at: DateTime<Utc>) -> OrderNumber;
}

/// Timestamp plus 6-digit random suffix.
///
/// Two orders created in the same second collide with probability 1 in a
/// million.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampOrderNumberGenerator;

impl OrderNumberGenerator for TimestampOrderNumberGenerator {
    fn generate(&self, created_at: DateTime<Utc>) -> OrderNumber {
        let suffix = rand::rng().random_range(0..SUFFIX_RANGE);
        OrderNumber::from_parts(created_at, suffix)
    }
}
