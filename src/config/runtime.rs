//! Runtime configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Runtime configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl RuntimeConfig {
    /// Validate runtime configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,tabletalk=debug".to_string()
}
