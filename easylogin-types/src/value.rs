//! Attribute values.
//!
//! Directory records only ever hold a handful of value shapes, so values are
//! a closed sum type instead of an open "any object".

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryValue {
    /// Text value.
    String(String),
    /// Opaque bytes (photos, certificates, hashes). Never reinterpreted as text.
    Bytes(Vec<u8>),
    /// Point in time, always UTC.
    Date(DateTime<Utc>),
    /// Multiple values for one attribute.
    List(Vec<DirectoryValue>),
    /// Nested key/value structure (e.g. a record's authentication methods).
    Bag(BTreeMap<String, DirectoryValue>),
}

impl DirectoryValue {
    /// Builds a list from anything convertible into values.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DirectoryValue>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the bytes if this is a binary value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the elements if this is a list.
    pub fn as_list(&self) -> Option<&[DirectoryValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested map if this is a bag.
    pub fn as_bag(&self) -> Option<&BTreeMap<String, DirectoryValue>> {
        match self {
            Self::Bag(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Iterates over the individual values: the elements of a list, or the
    /// value itself.
    pub fn values(&self) -> std::slice::Iter<'_, DirectoryValue> {
        match self {
            Self::List(items) => items.iter(),
            other => std::slice::from_ref(other).iter(),
        }
    }

    /// Returns the first string among this value or its list elements.
    pub fn first_str(&self) -> Option<&str> {
        self.values().find_map(Self::as_str)
    }

    /// Converts a JSON value as delivered by a backend.
    ///
    /// Numbers and booleans become their textual form; `null` has no
    /// directory equivalent and is rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Self::from_json_at(value, "$")
    }

    fn from_json_at(value: serde_json::Value, path: &str) -> Result<Self> {
        use serde_json::Value;
        Ok(match value {
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::String(n.to_string()),
            Value::Bool(b) => Self::String(b.to_string()),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| Self::from_json_at(item, &format!("{path}[{i}]")))
                    .collect::<Result<_>>()?,
            ),
            Value::Object(map) => Self::Bag(
                map.into_iter()
                    .map(|(k, v)| {
                        let child = format!("{path}.{k}");
                        Self::from_json_at(v, &child).map(|v| (k, v))
                    })
                    .collect::<Result<_>>()?,
            ),
            Value::Null => {
                return Err(Error::UnsupportedJson {
                    path: path.to_string(),
                    kind: "null",
                });
            }
        })
    }
}

impl From<&str> for DirectoryValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for DirectoryValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<u8>> for DirectoryValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for DirectoryValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<DateTime<Utc>> for DirectoryValue {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Vec<DirectoryValue>> for DirectoryValue {
    fn from(items: Vec<DirectoryValue>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, DirectoryValue>> for DirectoryValue {
    fn from(map: BTreeMap<String, DirectoryValue>) -> Self {
        Self::Bag(map)
    }
}
