//! In-memory string record store.
//!
//! Records are keyed by the SHA-256 digest of their value, so lookup and
//! deletion take the original string and hash it rather than scanning.
//! The store is process-local and internally synchronized; durable
//! persistence is a caller concern.

use crate::analyzer::{self, Analysis};
use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// A stored string together with its computed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredString {
    /// Record ID: the SHA-256 hex digest of `value`.
    pub id: String,

    /// The analyzed string (trimmed by the HTTP layer before insertion).
    pub value: String,

    /// Properties computed at insertion time.
    pub properties: Analysis,

    /// Insertion timestamp, UTC ISO-8601 with milliseconds and `Z` suffix.
    pub created_at: String,
}

/// Returned when inserting a value whose digest is already present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("String already exists")]
pub struct DuplicateString;

/// Concurrent map of analyzed strings, keyed by value digest.
#[derive(Debug, Default)]
pub struct StringStore {
    entries: DashMap<String, StoredString>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `value` and insert the resulting record.
    ///
    /// The digest doubles as the record ID, so two inserts of the same
    /// value collide; the second returns [`DuplicateString`] and leaves
    /// the original record untouched.
    pub fn insert(&self, value: &str) -> Result<StoredString, DuplicateString> {
        let properties = analyzer::analyze(value);
        let entry = StoredString {
            id: properties.hash.clone(),
            value: value.to_string(),
            properties,
            created_at: now_iso_millis(),
        };

        match self.entries.entry(entry.id.clone()) {
            dashmap::Entry::Occupied(_) => Err(DuplicateString),
            dashmap::Entry::Vacant(slot) => {
                slot.insert(entry.clone());
                Ok(entry)
            }
        }
    }

    /// Look up a record by its original value.
    pub fn get(&self, value: &str) -> Option<StoredString> {
        self.entries
            .get(&analyzer::sha256_hex(value))
            .map(|entry| entry.clone())
    }

    /// Remove a record by its original value. Returns whether it existed.
    pub fn remove(&self, value: &str) -> bool {
        self.entries
            .remove(&analyzer::sha256_hex(value))
            .is_some()
    }

    /// Snapshot of all records, in no particular order.
    pub fn snapshot(&self) -> Vec<StoredString> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Current UTC time as ISO-8601 with millisecond precision and `Z` suffix,
/// e.g. `2026-08-30T12:34:56.789Z`.
fn now_iso_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
