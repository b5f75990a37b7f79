//! Pure string analysis.
//!
//! Everything in this module is a deterministic function of its input:
//! no I/O, no logging, no shared state. Callers may invoke [`analyze`]
//! concurrently without coordination.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Hash arbitrary text with SHA-256 and return a lowercase hex digest.
///
/// The digest is computed over the UTF-8 byte encoding of `value`. The same
/// input always yields a byte-identical digest, which is what makes it
/// usable as a store key.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Properties computed over a single input string.
///
/// Immutable once constructed; the record has no identity beyond its fields
/// and may be discarded or persisted verbatim by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The input string, unmodified.
    pub original: String,

    /// Count of `char`s (Unicode scalar values) in the input.
    pub length: usize,

    /// Whether the input reads identically forward and backward.
    ///
    /// No normalization is applied: the comparison is case- and
    /// whitespace-sensitive. The empty string is a palindrome by
    /// convention (it vacuously equals its reverse).
    pub is_palindrome: bool,

    /// Count of distinct `char`s present in the input.
    pub unique_characters: usize,

    /// Count of maximal runs of non-whitespace characters.
    pub word_count: usize,

    /// Occurrences of each `char` in the input.
    pub character_frequency: BTreeMap<char, usize>,

    /// Lowercase-hex SHA-256 digest of the input's UTF-8 bytes.
    pub hash: String,
}

/// Analyze a string and return its property record.
///
/// Total over all valid UTF-8 input, including the empty string, which
/// yields `length = 0`, `unique_characters = 0`, `word_count = 0`,
/// `is_palindrome = true`, and the digest of the empty byte sequence.
/// Runs in time linear in the input length.
pub fn analyze(input: &str) -> Analysis {
    let mut character_frequency: BTreeMap<char, usize> = BTreeMap::new();
    let mut length = 0usize;
    for ch in input.chars() {
        *character_frequency.entry(ch).or_insert(0) += 1;
        length += 1;
    }

    Analysis {
        original: input.to_string(),
        length,
        is_palindrome: input.chars().eq(input.chars().rev()),
        unique_characters: character_frequency.len(),
        word_count: input.split_whitespace().count(),
        character_frequency,
        hash: sha256_hex(input),
    }
}
