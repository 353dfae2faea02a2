use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of an authenticated customer.
///
/// The identity is issued and verified upstream; inside the service it is an
/// opaque number that is only carried along and stored with the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user ID from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Error returned when a user ID cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user id: {0:?}")]
pub struct ParseUserIdError(String);

impl FromStr for UserId {
    type Err = ParseUserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseUserIdError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_preserves_value() {
        let id = UserId::new(1001);
        assert_eq!(id.as_u64(), 1001);
        assert_eq!(u64::from(id), 1001);
    }

    #[test]
    fn user_id_parses_from_text() {
        assert_eq!("1001".parse::<UserId>().unwrap(), UserId::new(1001));
        assert_eq!(" 42 ".parse::<UserId>().unwrap(), UserId::new(42));
        assert!("abc".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = "abc".parse::<UserId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid user id: \"abc\"");
    }

    #[test]
    fn user_id_serializes_as_number() {
        let id = UserId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
