//! Term normalization
//!
//! Documents and queries go through the same two steps, so a surface word
//! always maps to the same term:
//! - ASCII letters are lowercased, everything else becomes a space
//! - The result is split on whitespace runs
//!
//! Only ASCII letters form terms. Digits, punctuation and any non-ASCII
//! character act as separators.

use std::collections::HashSet;

/// Normalize text into a space-delimited, lowercase letter stream
///
/// Total and length-preserving: every input character maps to exactly one
/// output character.
///
/// # Example
///
/// ```
/// use minisearch_search::normalizer::normalize;
///
/// assert_eq!(normalize("THE Cat!"), "the cat ");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalize raw document bytes
///
/// Invalid UTF-8 sequences decode to replacement characters, which are
/// non-letters and so become separators like any other non-ASCII byte.
pub fn normalize_bytes(bytes: &[u8]) -> String {
    normalize(&String::from_utf8_lossy(bytes))
}

/// Tokenize text into terms, keeping order and repetitions
///
/// # Example
///
/// ```
/// use minisearch_search::normalizer::tokenize;
///
/// let tokens = tokenize("Hello, World! hello");
/// assert_eq!(tokens, vec!["hello", "world", "hello"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    split_terms(&normalize(text))
}

/// Tokenize and deduplicate, keeping first-occurrence order
///
/// # Example
///
/// ```
/// use minisearch_search::normalizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    dedup_terms(tokenize(text))
}

/// Distinct terms of raw document bytes, in first-occurrence order
///
/// Same terms as [`tokenize_unique`] over the lossily decoded text.
pub fn tokenize_unique_bytes(bytes: &[u8]) -> Vec<String> {
    tokenize_unique(&String::from_utf8_lossy(bytes))
}

fn split_terms(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(String::from).collect()
}

fn dedup_terms(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
