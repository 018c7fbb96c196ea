//! Typed access to component configuration and resource properties.
//!
//! Content repositories store properties loosely: the same key may hold a
//! string in one node and a boolean or a date in another. [`ValueMap`] keeps
//! the raw [`Value`] and converts on read, the way a property store does:
//!
//! | Stored as | `get_str` | `get_date` |
//! |-----------|-----------|------------|
//! | `"true"` | `"true"` | — |
//! | `true` | `"true"` | — |
//! | `1700000000000` | `"1700000000000"` | epoch millis |
//! | `"2023-11-14T22:13:20Z"` | as stored | RFC 3339 |
//!
//! A failed conversion reads as absent. Nothing here returns an error; the
//! caller decides what an absent value means.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single stored property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Double(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

/// Read-only key/value properties of a component or resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap(BTreeMap<String, Value>);

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value converted to its string form, `None` when the key is absent.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key).map(Value::to_string)
    }

    /// Value converted to its string form, or `default` when absent.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get_str(key).unwrap_or_else(|| default.to_string())
    }

    /// Value converted to a date.
    ///
    /// Strings are parsed as RFC 3339, integers are epoch milliseconds.
    /// Anything else, or a string that does not parse, reads as `None`.
    pub fn get_date(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        match self.get(key)? {
            Value::String(s) => DateTime::parse_from_rfc3339(s.trim()).ok(),
            Value::Long(millis) => {
                DateTime::from_timestamp_millis(*millis).map(|d| d.fixed_offset())
            }
            Value::Bool(_) | Value::Double(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
