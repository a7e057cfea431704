//! Field map handed to the payload encoders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single form value: free text or a checkbox flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

/// Ordered mapping from field key to value, keyed per content kind.
///
/// Absent keys read as an empty string or `false`, so encoders never have
/// to deal with a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, FieldValue>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a text value.
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), FieldValue::Text(value.into()));
        self
    }

    /// Builder-style insert of a flag value.
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.0.insert(key.into(), FieldValue::Flag(value));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.0.insert(key.into(), value);
    }

    /// Returns the text value for `key`, or `""` when absent.
    ///
    /// A flag stored under a text key reads as empty.
    pub fn text(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Returns the flag value for `key`, or `false` when absent.
    ///
    /// Text values count as set when they read `true`, `1`, `on` or `yes`.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(FieldValue::Flag(b)) => *b,
            Some(FieldValue::Text(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes")
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    /// Applies `f` to every text value, leaving flags untouched.
    pub fn map_text(self, f: impl Fn(&str) -> String) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(k, v)| match v {
                    FieldValue::Text(s) => (k, FieldValue::Text(f(&s))),
                    flag => (k, flag),
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), FieldValue::Text(v.into())))
                .collect(),
        )
    }
}
