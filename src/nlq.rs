//! Natural-language filter queries.
//!
//! Maps a small fixed phrase vocabulary onto [`Filters`]. The parser is
//! deliberately shallow: it recognizes known clauses anywhere in the query
//! and rejects anything it cannot turn into at least one filter.
//!
//! Recognized clauses (matched against the trimmed, lowercased query):
//! - `non-palindromic` / `palindromic` / `palindrome`
//! - `single word` / `one word`
//! - `longer than N` (sets a minimum length of N + 1)
//! - `containing the letter X`
//! - `contain the first vowel` (shorthand for the letter `a`)

use crate::filter::Filters;
use once_cell::sync::Lazy;
use regex::Regex;

static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than\s+(\d+)").expect("valid regex"));
static CONTAINING_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"containing the letter\s+([a-zA-Z])").expect("valid regex"));

/// Natural-language parse failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryParseError {
    /// Empty query, or no recognized clause.
    #[error("Unable to parse natural language query")]
    Unparsable,

    /// The query asks for palindromic and non-palindromic at once.
    #[error("Query parsed but resulted in conflicting filters")]
    Conflicting,
}

/// Parse a natural-language query into a filter set.
pub fn parse_query(query: &str) -> Result<Filters, QueryParseError> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Err(QueryParseError::Unparsable);
    }

    let mut filters = Filters::default();

    // "non-palindromic" itself contains "palindromic", so strip negated
    // mentions before deciding whether an affirmative one is present.
    let negated = q.contains("non-palindromic");
    let affirmative = q.replace("non-palindromic", "").contains("palindrom");
    match (negated, affirmative) {
        (true, true) => return Err(QueryParseError::Conflicting),
        (true, false) => filters.is_palindrome = Some(false),
        (false, true) => filters.is_palindrome = Some(true),
        (false, false) => {}
    }

    if q.contains("single word") || q.contains("one word") {
        filters.word_count = Some(1);
    }

    if let Some(captures) = LONGER_THAN.captures(&q) {
        let threshold: usize = captures[1]
            .parse()
            .map_err(|_| QueryParseError::Unparsable)?;
        // "longer than N" is an exclusive bound; N + 1 can overflow.
        let min_length = threshold
            .checked_add(1)
            .ok_or(QueryParseError::Unparsable)?;
        filters.min_length = Some(min_length);
    }

    if let Some(captures) = CONTAINING_LETTER.captures(&q) {
        filters.contains_character = captures[1].chars().next();
    }

    if q.contains("contain the first vowel") {
        filters.contains_character = Some('a');
    }

    if filters.is_empty() {
        return Err(QueryParseError::Unparsable);
    }

    Ok(filters)
}
