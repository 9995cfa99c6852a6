//! Corpus module - the question/answer knowledge the bot matches against.
//!
//! - `entry` - Corpus rows and their source tags
//! - `vectorizer` - TF-IDF fitting and sparse vector similarity
//! - `index` - Fit-once nearest-match lookup over the merged corpus

mod entry;
mod index;
mod vectorizer;

pub use entry::{CorpusEntry, CorpusSource};
pub use index::{CorpusIndex, QueryMatch};
pub use vectorizer::{SparseVector, TfidfVectorizer};
