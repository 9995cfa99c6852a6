//! Approximate string matching for restaurant name lookup.
//!
//! Implements the Ratcliff/Obershelp measure: twice the total length of
//! recursively matched common substrings over the combined input length.
//! Comparison is lowercased; the catalog is trusted data and users type
//! however they like.

/// Minimum similarity ratio for a candidate to count as a match.
pub const MATCH_CUTOFF: f64 = 0.6;

/// Similarity ratio between two strings, in [0, 1].
///
/// 1.0 for equal strings (ignoring case), 0.0 for strings with no common
/// characters. Two empty strings are defined as identical.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matches = matching_len(&a, &b);
    (2 * matches) as f64 / total as f64
}

/// Picks the single best catalog candidate for a query.
///
/// Candidates below [`MATCH_CUTOFF`] never match. Ties break to the first
/// candidate in list order.
pub fn find_best<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Option<&'a str> {
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let candidate = candidate.as_ref();
        let ratio = similarity_ratio(candidate, query);
        if ratio < MATCH_CUTOFF {
            continue;
        }
        let beats_current = match best {
            Some((_, best_ratio)) => ratio > best_ratio,
            None => true,
        };
        if beats_current {
            best = Some((candidate, ratio));
        }
    }
    best.map(|(candidate, _)| candidate)
}

// Total length of matching blocks: the longest common substring plus,
// recursively, the matches to its left and to its right.
fn matching_len(a: &[char], b: &[char]) -> usize {
    let (a_start, b_start, len) = longest_common_substring(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_len(&a[..a_start], &b[..b_start])
        + matching_len(&a[a_start + len..], &b[b_start + len..])
}

// Returns (start in a, start in b, length) of the longest common substring,
// preferring the earliest position in a, then in b.
fn longest_common_substring(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut curr = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                curr[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = curr;
    }
    best
}
