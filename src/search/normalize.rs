use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Folds text into the form used for distance computation.
///
/// Lower-cases, trims and collapses internal whitespace runs to a single
/// space, then returns the characters so callers can index by position.
pub fn normalize(text: &str) -> Vec<char> {
    WHITESPACE
        .replace_all(text.trim(), " ")
        .to_lowercase()
        .chars()
        .collect()
}

/// Normalizes a query, returning `None` when nothing searchable remains.
pub fn normalize_query(query: &str) -> Option<Vec<char>> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
