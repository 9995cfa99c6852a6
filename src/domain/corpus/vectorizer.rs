//! TF-IDF vectorization over corpus questions.
//!
//! Fits a vocabulary and smoothed inverse-document-frequency weights once,
//! then turns any text into an L2-normalized sparse vector in that space.
//! Terms unseen during fitting carry zero weight, so out-of-vocabulary
//! queries degrade to low confidence instead of failing.

use std::collections::{HashMap, HashSet};

use crate::domain::foundation::text::tokenize;

/// Fitted term-weight model mapping vocabulary terms to dimensions.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits vocabulary and idf weights over the given documents.
    ///
    /// Term frequency is the raw token count per document. Inverse document
    /// frequency is smoothed: `ln((1 + n_docs) / (1 + df)) + 1`.
    ///
    /// Returns `None` when the documents yield no vocabulary (all empty or
    /// nothing but single-character tokens).
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Option<Self> {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokenize(doc.as_ref()) {
                let next_dim = vocabulary.len();
                let dim = *vocabulary.entry(token).or_insert_with(|| {
                    document_frequency.push(0);
                    next_dim
                });
                if seen.insert(dim) {
                    document_frequency[dim] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return None;
        }

        let n_docs = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Some(Self { vocabulary, idf })
    }

    /// Vectorizes text against the fitted vocabulary.
    ///
    /// Out-of-vocabulary tokens are dropped. Text with no in-vocabulary
    /// tokens yields the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
        }

        let mut components: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(dim, tf)| (dim, tf * self.idf[dim]))
            .collect();
        components.sort_by_key(|(dim, _)| *dim);

        SparseVector::normalized(components)
    }

    /// Returns the number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// L2-normalized sparse vector in a fitted vocabulary space.
///
/// Components are sorted by dimension. The zero vector has no components.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    components: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from weighted components, normalizing to unit length.
    ///
    /// Components must be sorted by dimension. Zero-norm input yields the
    /// zero vector.
    fn normalized(components: Vec<(usize, f64)>) -> Self {
        let norm = components
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f64>()
            .sqrt();
        if norm == 0.0 {
            return Self { components: Vec::new() };
        }
        Self {
            components: components
                .into_iter()
                .map(|(dim, w)| (dim, w / norm))
                .collect(),
        }
    }

    /// Returns true if this is the zero vector.
    pub fn is_zero(&self) -> bool {
        self.components.is_empty()
    }

    /// Cosine similarity with another vector from the same space.
    ///
    /// Both vectors are unit length, so this is their dot product, clamped
    /// to 1.0 against rounding drift. Zero vectors yield 0.0.
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        self.dot(other).min(1.0)
    }

    // Merge walk over two dimension-sorted component lists.
    fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        let mut a = self.components.iter().peekable();
        let mut b = other.components.iter().peekable();

        while let (Some(&&(dim_a, w_a)), Some(&&(dim_b, w_b))) = (a.peek(), b.peek()) {
            match dim_a.cmp(&dim_b) {
                std::cmp::Ordering::Less => {
                    a.next();
                }
                std::cmp::Ordering::Greater => {
                    b.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += w_a * w_b;
                    a.next();
                    b.next();
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn fit(docs: &[&str]) -> TfidfVectorizer {
        TfidfVectorizer::fit(docs).expect("fit should succeed")
    }

    mod fitting {
        use super::*;

        #[test]
        fn fit_on_empty_documents_returns_none() {
            let docs: Vec<&str> = vec![];
            assert!(TfidfVectorizer::fit(&docs).is_none());
        }

        #[test]
        fn fit_with_no_usable_tokens_returns_none() {
            // Single-character tokens are dropped by tokenization
            assert!(TfidfVectorizer::fit(&["a b c", "? !"]).is_none());
        }

        #[test]
        fn fit_counts_distinct_terms() {
            let vectorizer = fit(&["hello world", "hello again"]);
            assert_eq!(vectorizer.vocabulary_size(), 3);
        }

        #[test]
        fn repeated_terms_within_document_count_once_for_df() {
            // "hello hello" and "hello world" both contain hello, so its idf
            // reflects df=2 and similarity between them stays below 1.0
            let vectorizer = fit(&["hello hello", "hello world"]);
            let a = vectorizer.transform("hello hello");
            let b = vectorizer.transform("hello world");
            let sim = a.cosine_similarity(&b);
            assert!(sim > 0.0 && sim < 1.0);
        }
    }

    mod transformation {
        use super::*;

        #[test]
        fn identical_text_has_similarity_one() {
            let vectorizer = fit(&["good morning friend", "what time is it"]);
            let a = vectorizer.transform("good morning friend");
            let b = vectorizer.transform("good morning friend");
            assert!((a.cosine_similarity(&b) - 1.0).abs() < EPSILON);
        }

        #[test]
        fn disjoint_text_has_similarity_zero() {
            let vectorizer = fit(&["good morning", "table booking"]);
            let a = vectorizer.transform("good morning");
            let b = vectorizer.transform("table booking");
            assert!(a.cosine_similarity(&b).abs() < EPSILON);
        }

        #[test]
        fn out_of_vocabulary_text_yields_zero_vector() {
            let vectorizer = fit(&["good morning", "table booking"]);
            let vector = vectorizer.transform("zebra quantum");
            assert!(vector.is_zero());
        }

        #[test]
        fn zero_vector_similarity_is_zero() {
            let vectorizer = fit(&["good morning"]);
            let zero = vectorizer.transform("zebra");
            let other = vectorizer.transform("good morning");
            assert_eq!(zero.cosine_similarity(&other), 0.0);
        }

        #[test]
        fn vectors_are_unit_length() {
            let vectorizer = fit(&["one two three", "two three four", "five"]);
            let vector = vectorizer.transform("one two five");
            assert!((vector.cosine_similarity(&vector) - 1.0).abs() < EPSILON);
        }

        #[test]
        fn shared_rare_term_outweighs_shared_common_term() {
            // "where" appears in one document, "the" in all three, so two
            // texts sharing "where" are closer than two sharing only "the"
            let vectorizer = fit(&[
                "the menu is long",
                "the staff is kind",
                "where is the door",
            ]);
            let query = vectorizer.transform("where is the exit");
            let rare = vectorizer.transform("where is the door");
            let common = vectorizer.transform("the menu is long");
            assert!(query.cosine_similarity(&rare) > query.cosine_similarity(&common));
        }

        #[test]
        fn similarity_is_symmetric() {
            let vectorizer = fit(&["book a table", "what is your name"]);
            let a = vectorizer.transform("book a table please");
            let b = vectorizer.transform("table name");
            assert!(
                (a.cosine_similarity(&b) - b.cosine_similarity(&a)).abs() < EPSILON
            );
        }
    }
}
