//! Attribute bags: one record's attributes and their values.

use crate::{DirectoryValue, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A mapping from attribute identifier to value.
///
/// Keys are unique and iterate in sorted order, so two bags with the same
/// content compare and render identically regardless of how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag(BTreeMap<String, DirectoryValue>);

impl AttributeBag {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a value, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<DirectoryValue>,
    ) -> Option<DirectoryValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&DirectoryValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<DirectoryValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, DirectoryValue> {
        self.0.iter()
    }

    /// Builds a bag from a JSON object such as a backend record.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match DirectoryValue::from_json(value)? {
            DirectoryValue::Bag(map) => Ok(Self(map)),
            DirectoryValue::List(_) => Err(Error::NotAnObject("array")),
            _ => Err(Error::NotAnObject("scalar")),
        }
    }

    /// Parses a bag from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(json)?)
    }

    pub fn into_inner(self) -> BTreeMap<String, DirectoryValue> {
        self.0
    }
}

impl<K: Into<String>, V: Into<DirectoryValue>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<DirectoryValue>> Extend<(K, V)> for AttributeBag {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for AttributeBag {
    type Item = (String, DirectoryValue);
    type IntoIter = btree_map::IntoIter<String, DirectoryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttributeBag {
    type Item = (&'a String, &'a DirectoryValue);
    type IntoIter = btree_map::Iter<'a, String, DirectoryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<BTreeMap<String, DirectoryValue>> for AttributeBag {
    fn from(map: BTreeMap<String, DirectoryValue>) -> Self {
        Self(map)
    }
}
