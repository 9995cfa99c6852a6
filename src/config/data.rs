//! Dataset location configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Location of the YAML datasets the assistant is built from
///
/// File names are joined onto `dir`, so they must be plain names
/// without path separators.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset files
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Small-talk question/answer dataset
    #[serde(default = "default_small_talk_file")]
    pub small_talk_file: String,

    /// FAQ question/answer dataset
    #[serde(default = "default_faq_file")]
    pub faq_file: String,

    /// Restaurant catalog dataset
    #[serde(default = "default_restaurants_file")]
    pub restaurants_file: String,
}

impl DataConfig {
    /// Validate dataset locations
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.trim().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        for (field, file) in [
            ("small_talk_file", &self.small_talk_file),
            ("faq_file", &self.faq_file),
            ("restaurants_file", &self.restaurants_file),
        ] {
            if file.trim().is_empty() {
                return Err(ValidationError::MissingDatasetFile(field));
            }
            if file.contains('/') || file.contains('\\') {
                return Err(ValidationError::DatasetFileNotPlain(field));
            }
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            small_talk_file: default_small_talk_file(),
            faq_file: default_faq_file(),
            restaurants_file: default_restaurants_file(),
        }
    }
}

fn default_dir() -> String {
    "data".to_string()
}

fn default_small_talk_file() -> String {
    "smalltalk.yaml".to_string()
}

fn default_faq_file() -> String {
    "faq.yaml".to_string()
}

fn default_restaurants_file() -> String {
    "restaurants.yaml".to_string()
}
