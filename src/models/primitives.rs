//! Primitive types and newtypes for type-safe API interactions.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Identifier of a record.
///
/// Most endpoints return integer ids, but the venture-capital endpoints
/// (funds, fund performances, commitment deals) sometimes return them as
/// strings. Both forms decode into a `RecordId`, and both render the same
/// way in a request path.
///
/// # Example
///
/// ```
/// use altpe_rs::RecordId;
///
/// let id = RecordId::from(42);
/// assert_eq!(id.to_string(), "42");
/// assert_eq!(id.as_i64(), Some(42));
///
/// let id = RecordId::from("fp-7");
/// assert_eq!(id.as_i64(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new record id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as an integer, when it is numeric.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        Self(n.to_string())
    }
}

impl From<u32> for RecordId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                let whole = n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64);
                Ok(match (n.as_i64(), whole) {
                    (Some(i), _) => RecordId::from(i),
                    (None, Some(f)) => RecordId::from(f as i64),
                    _ => RecordId(n.to_string()),
                })
            }
            Value::String(s) => Ok(RecordId(s)),
            other => Err(D::Error::custom(format!("invalid record id: {other}"))),
        }
    }
}
