//! Text normalization helpers shared by matching and vectorization.
//!
//! Matching is deliberately shallow: punctuation is stripped, casing is
//! handled at each comparison site, and tokens shorter than two characters
//! carry no signal and are dropped.

/// Minimum character length for a token to be kept.
const MIN_TOKEN_LEN: usize = 2;

/// Removes ASCII punctuation, leaving letters, digits, and whitespace intact.
///
/// Total and case-preserving. Callers that need case-insensitive
/// comparison lowercase at the comparison site.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !is_punctuation(*c)).collect()
}

/// Lowercases, strips punctuation, and splits into tokens of at least
/// two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(&text.to_lowercase())
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(|t| t.to_string())
        .collect()
}

// The fixed ASCII punctuation set, independent of locale.
fn is_punctuation(c: char) -> bool {
    matches!(c, '!'..='/' | ':'..='@' | '['..='`' | '{'..='~')
}
