//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TABLETALK_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use tabletalk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Datasets under {}", config.data.dir);
//! ```

mod data;
mod error;
mod runtime;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use runtime::RuntimeConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the TableTalk assistant.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset locations (directory and file names)
    #[serde(default)]
    pub data: DataConfig,

    /// Runtime settings (log filter)
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TABLETALK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TABLETALK__DATA__DIR=datasets` -> `data.dir = datasets`
    /// - `TABLETALK__RUNTIME__LOG_LEVEL=debug` -> `runtime.log_level = debug`
    ///
    /// Every value has a default, so an empty environment yields a
    /// working configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TABLETALK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()?;
        self.runtime.validate()?;
        Ok(())
    }
}
