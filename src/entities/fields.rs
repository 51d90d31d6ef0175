// Shared record fields - error maps and optimistic pending actions

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// PENDING ACTION
// ============================================================================

/// Optimistic update still waiting on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingAction {
    Add,
    Delete,
    Update,
}

impl PendingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PendingAction::Add => "add",
            PendingAction::Delete => "delete",
            PendingAction::Update => "update",
        }
    }
}

// ============================================================================
// ERROR FIELDS
// ============================================================================

/// Error key → message map attached to a record
///
/// Keys are ordered byte-wise lexicographically. The storage layer keys
/// errors by microsecond timestamps, which all have the same width, so this
/// order is also chronological for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorFields(BTreeMap<String, String>);

impl ErrorFields {
    pub fn new() -> Self {
        ErrorFields(BTreeMap::new())
    }

    /// Insert (or replace) the message stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Add an error keyed by the current time in microseconds
    ///
    /// Returns the key that was used.
    pub fn add_now(&mut self, message: impl Into<String>) -> String {
        let mut micros = Utc::now().timestamp_micros();

        // Two errors inside the same microsecond must not overwrite each other
        while self.0.contains_key(&micros.to_string()) {
            micros += 1;
        }

        let key = micros.to_string();
        self.0.insert(key.clone(), message.into());
        key
    }

    /// Messages only, in key order
    pub fn messages(&self) -> Vec<String> {
        self.0.values().cloned().collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ErrorFields(
            iter.into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
