//! YAML-backed dataset adapter.
//!
//! Loads the corpora and the restaurant catalog from YAML files under a
//! data directory. Each file holds a sequence of records; row order in
//! the file is the corpus order the domain relies on.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::domain::catalog::Restaurant;
use crate::domain::corpus::{CorpusEntry, CorpusSource};
use crate::ports::{CatalogStore, CorpusStore, DatasetError};

/// Question/answer row as stored on disk.
#[derive(Debug, Deserialize)]
struct QnaRecord {
    question: String,
    answer: String,
}

/// Restaurant row as stored on disk.
#[derive(Debug, Deserialize)]
struct RestaurantRecord {
    name: String,
    available_times: Vec<String>,
}

/// File-based dataset store reading YAML documents.
#[derive(Debug, Clone)]
pub struct YamlDataStore {
    small_talk_path: PathBuf,
    faq_path: PathBuf,
    restaurants_path: PathBuf,
}

impl YamlDataStore {
    /// Create a store over a data directory and its three dataset files.
    pub fn new<P: AsRef<Path>>(
        data_dir: P,
        small_talk_file: &str,
        faq_file: &str,
        restaurants_file: &str,
    ) -> Self {
        let dir = data_dir.as_ref();
        Self {
            small_talk_path: dir.join(small_talk_file),
            faq_path: dir.join(faq_file),
            restaurants_path: dir.join(restaurants_file),
        }
    }

    async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
        let dataset = path.display().to_string();
        if !path.exists() {
            return Err(DatasetError::NotFound(dataset));
        }
        let yaml = fs::read_to_string(path).await.map_err(|e| DatasetError::Io {
            dataset: dataset.clone(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&yaml).map_err(|e| DatasetError::Parse {
            dataset,
            reason: e.to_string(),
        })
    }

    async fn load_corpus(
        path: &Path,
        source: CorpusSource,
    ) -> Result<Vec<CorpusEntry>, DatasetError> {
        let records: Vec<QnaRecord> = Self::read_records(path).await?;
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let entry = CorpusEntry::new(record.question, record.answer, source).map_err(|e| {
                DatasetError::InvalidRow {
                    dataset: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
            entries.push(entry);
        }
        debug!(
            dataset = %path.display(),
            rows = entries.len(),
            "corpus dataset loaded"
        );
        Ok(entries)
    }
}

#[async_trait]
impl CorpusStore for YamlDataStore {
    async fn load_small_talk(&self) -> Result<Vec<CorpusEntry>, DatasetError> {
        Self::load_corpus(&self.small_talk_path, CorpusSource::SmallTalk).await
    }

    async fn load_faq(&self) -> Result<Vec<CorpusEntry>, DatasetError> {
        Self::load_corpus(&self.faq_path, CorpusSource::Faq).await
    }
}

#[async_trait]
impl CatalogStore for YamlDataStore {
    async fn load_restaurants(&self) -> Result<Vec<Restaurant>, DatasetError> {
        let records: Vec<RestaurantRecord> = Self::read_records(&self.restaurants_path).await?;
        let mut restaurants = Vec::with_capacity(records.len());
        for record in records {
            let restaurant =
                Restaurant::new(record.name, record.available_times).map_err(|e| {
                    DatasetError::InvalidRow {
                        dataset: self.restaurants_path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;
            restaurants.push(restaurant);
        }
        debug!(
            dataset = %self.restaurants_path.display(),
            rows = restaurants.len(),
            "restaurant catalog loaded"
        );
        Ok(restaurants)
    }
}
