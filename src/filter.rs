//! Property filters for stored strings.
//!
//! Filters arrive as raw query parameters and are parsed strictly:
//! unknown keys, empty values, malformed numbers, and inconsistent bounds
//! are all rejected rather than ignored, so a caller typo never silently
//! returns the unfiltered collection.

use crate::store::StoredString;
use serde::Serialize;
use std::collections::HashMap;

/// Query parameter keys accepted by the listing endpoint.
pub const ALLOWED_PARAMS: &[&str] = &[
    "is_palindrome",
    "min_length",
    "max_length",
    "word_count",
    "contains_character",
];

/// Parsed filter set. Absent fields match everything.
///
/// Serialized as the `filters_applied` / `parsed_filters` response field,
/// with absent filters rendered as nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub word_count: Option<usize>,
    pub contains_character: Option<char>,
}

/// Filter parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid query parameter '{0}'")]
    UnknownParameter(String),

    #[error("Invalid query parameter values or types")]
    InvalidValue,
}

impl Filters {
    /// Parse a filter set from raw query parameters.
    ///
    /// Rejects unknown keys (naming the first offender), values that do not
    /// parse strictly, a `contains_character` that is not exactly one
    /// alphabetic character, and `min_length > max_length`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FilterError> {
        for key in params.keys() {
            if !ALLOWED_PARAMS.contains(&key.as_str()) {
                return Err(FilterError::UnknownParameter(key.clone()));
            }
        }

        let is_palindrome = params
            .get("is_palindrome")
            .map(|raw| parse_bool_strict(raw))
            .transpose()?;
        let min_length = params
            .get("min_length")
            .map(|raw| parse_usize_strict(raw))
            .transpose()?;
        let max_length = params
            .get("max_length")
            .map(|raw| parse_usize_strict(raw))
            .transpose()?;
        let word_count = params
            .get("word_count")
            .map(|raw| parse_usize_strict(raw))
            .transpose()?;
        let contains_character = params
            .get("contains_character")
            .map(|raw| parse_single_letter(raw))
            .transpose()?;

        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(FilterError::InvalidValue);
            }
        }

        Ok(Self {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        })
    }

    /// Whether `entry` satisfies every present predicate.
    pub fn matches(&self, entry: &StoredString) -> bool {
        let props = &entry.properties;

        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            if !entry.value.contains(ch) {
                return false;
            }
        }

        true
    }

    /// True when no predicate is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}

/// Accepts exactly `true` or `false` (trimmed, any case). Empty is invalid.
fn parse_bool_strict(raw: &str) -> Result<bool, FilterError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FilterError::InvalidValue),
    }
}

/// Accepts a non-negative integer. Empty or signed input is invalid.
fn parse_usize_strict(raw: &str) -> Result<usize, FilterError> {
    raw.trim().parse().map_err(|_| FilterError::InvalidValue)
}

/// Accepts exactly one alphabetic character.
fn parse_single_letter(raw: &str) -> Result<char, FilterError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Ok(ch),
        _ => Err(FilterError::InvalidValue),
    }
}
