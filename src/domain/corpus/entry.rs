//! Corpus entries - question/answer pairs the bot can match against.
//!
//! The corpus is an ordered sequence: entry position is the identity used
//! to resolve a similarity score back to its answer, so order is preserved
//! from load to lookup.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Which dataset an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusSource {
    /// Casual conversation pairs, scanned first for greeting matches.
    SmallTalk,
    /// General question/answer pairs used by the fallback rule.
    Faq,
}

impl CorpusSource {
    /// Returns a short label for the source, suitable for log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallTalk => "small_talk",
            Self::Faq => "faq",
        }
    }
}

/// One question/answer pair in the matching corpus.
///
/// Immutable after construction. The question drives vector-space and
/// token matching; the answer is returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    question: String,
    answer: String,
    source: CorpusSource,
}

impl CorpusEntry {
    /// Creates a corpus entry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the question is empty or whitespace-only
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        source: CorpusSource,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        Ok(Self {
            question,
            answer: answer.into(),
            source,
        })
    }

    /// Returns the question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Returns the answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the dataset this entry came from.
    pub fn source(&self) -> CorpusSource {
        self.source
    }
}
