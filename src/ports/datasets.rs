//! Dataset ports - interfaces for the read-only seed data.
//!
//! The corpora and the restaurant catalog are supplied by external
//! collaborators and loaded once at startup. These ports define the
//! contract; adapters decide where the rows actually come from.

use async_trait::async_trait;

use crate::domain::catalog::Restaurant;
use crate::domain::corpus::CorpusEntry;

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Failed to read dataset '{dataset}': {reason}")]
    Io { dataset: String, reason: String },

    #[error("Failed to parse dataset '{dataset}': {reason}")]
    Parse { dataset: String, reason: String },

    #[error("Invalid row in dataset '{dataset}': {reason}")]
    InvalidRow { dataset: String, reason: String },
}

/// Port for loading the question/answer corpora.
///
/// Implementations must preserve row order; corpus position is the
/// identity a similarity match resolves back to.
#[async_trait]
pub trait CorpusStore: Send + Sync {
    /// Load the small-talk dataset in row order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the dataset is missing, unreadable,
    /// or contains an invalid row.
    async fn load_small_talk(&self) -> Result<Vec<CorpusEntry>, DatasetError>;

    /// Load the FAQ dataset in row order.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the dataset is missing, unreadable,
    /// or contains an invalid row.
    async fn load_faq(&self) -> Result<Vec<CorpusEntry>, DatasetError>;
}

/// Port for loading the restaurant catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load all restaurants in row order.
    ///
    /// An empty catalog is not an error; lookups against it simply
    /// find nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the dataset is missing, unreadable,
    /// or contains an invalid row.
    async fn load_restaurants(&self) -> Result<Vec<Restaurant>, DatasetError>;
}
