//! Corpus index - fit-once similarity lookup over all corpus questions.
//!
//! Built at startup from the merged small-talk and FAQ datasets and
//! read-only afterwards. Rebuilding the vector space requires constructing
//! a new index.

use tracing::{debug, trace};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::entry::{CorpusEntry, CorpusSource};
use super::vectorizer::{SparseVector, TfidfVectorizer};

/// Result of a nearest-match lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryMatch {
    /// Position of the best-matching entry in corpus order.
    pub index: usize,
    /// Cosine similarity of the match, in [0, 1].
    pub confidence: f64,
}

/// Fitted vector-space index over the merged corpus.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    entries: Vec<CorpusEntry>,
    vectorizer: TfidfVectorizer,
    vectors: Vec<SparseVector>,
}

impl CorpusIndex {
    /// Builds the index from small-talk and FAQ entries.
    ///
    /// Small-talk rows come first, FAQ rows after, preserving row order
    /// within each dataset.
    ///
    /// # Errors
    ///
    /// - `CorpusEmpty` if both datasets are empty or yield no vocabulary
    pub fn from_datasets(
        small_talk: Vec<CorpusEntry>,
        faq: Vec<CorpusEntry>,
    ) -> Result<Self, DomainError> {
        let mut entries = small_talk;
        entries.extend(faq);
        Self::build(entries)
    }

    /// Builds the index from an already-merged, ordered entry list.
    ///
    /// # Errors
    ///
    /// - `CorpusEmpty` if the corpus is empty or yields no vocabulary
    pub fn build(entries: Vec<CorpusEntry>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::new(
                ErrorCode::CorpusEmpty,
                "Cannot build an index over an empty corpus",
            ));
        }

        let questions: Vec<&str> = entries.iter().map(|e| e.question()).collect();
        let vectorizer = TfidfVectorizer::fit(&questions).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CorpusEmpty,
                "Corpus questions yield no vocabulary",
            )
            .with_detail("entries", entries.len().to_string())
        })?;

        let vectors = questions.iter().map(|q| vectorizer.transform(q)).collect();

        debug!(
            entries = entries.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "corpus index built"
        );

        Ok(Self {
            entries,
            vectorizer,
            vectors,
        })
    }

    /// Finds the corpus entry most similar to the query.
    ///
    /// Total over all input: a query with no in-vocabulary tokens matches
    /// entry 0 with confidence 0.0. Ties break to the lowest index.
    /// Thresholding is the caller's concern.
    pub fn best_match(&self, query: &str) -> QueryMatch {
        let query_vector = self.vectorizer.transform(query);

        let mut best = QueryMatch {
            index: 0,
            confidence: 0.0,
        };
        for (index, vector) in self.vectors.iter().enumerate() {
            let confidence = query_vector.cosine_similarity(vector);
            if confidence > best.confidence {
                best = QueryMatch { index, confidence };
            }
        }

        trace!(
            index = best.index,
            confidence = best.confidence,
            "corpus lookup"
        );
        best
    }

    /// Vectorizes text in the index's fitted space.
    ///
    /// Lets callers pre-compute reference vectors that are comparable with
    /// query vectors from the same vocabulary.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        self.vectorizer.transform(text)
    }

    /// Returns all entries in corpus order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Returns the entries from one source, in corpus order.
    pub fn entries_from(&self, source: CorpusSource) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter().filter(move |e| e.source() == source)
    }

    /// Returns the number of entries in the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the corpus holds no entries. Always false for an
    /// index that was built successfully.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
