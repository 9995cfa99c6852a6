//! Name extraction from free-text utterances.
//!
//! Recognizes self-introduction phrases anywhere in the utterance, then
//! falls back to treating a bare single word as a name. Introduction
//! phrases are tried in a fixed order; the first capture wins.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)my name is ([a-zA-Z]+)",
        r"(?i)i am ([a-zA-Z]+)",
        r"(?i)call me ([a-zA-Z]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("name pattern is valid"))
    .collect()
});

/// Extracts a stated name from an utterance.
///
/// Returns the name exactly as the user typed it. An utterance that is a
/// single alphabetic word counts as a name on its own (the answer to
/// "may I know your name?").
pub fn extract_name(text: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(text) {
            if let Some(name) = captures.get(1) {
                return Some(name.as_str().to_string());
            }
        }
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() && trimmed.chars().all(char::is_alphabetic) {
        return Some(trimmed.to_string());
    }

    None
}
