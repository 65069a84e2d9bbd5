//! # Per-Field Error Map
//!
//! Maps a field to the single human-readable message currently shown for it.
//! A field with no entry is valid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Field → message map with last-write-wins insertion.
///
/// Serializes as a JSON object keyed by wire field names, in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`, replacing any earlier message.
    ///
    /// An empty message clears the field.
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, message);
        }
    }

    /// Remove the message for `field`, if any.
    pub fn clear(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    /// The message for `field`, if it is invalid.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` currently has a message.
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with messages, in record order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    /// `(field, message)` pairs, in record order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Fold `other` into `self`; messages in `other` win.
    pub fn extend(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }
}

impl FromIterator<(FieldName, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (field, message) in iter {
            map.insert(field, message);
        }
        map
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
