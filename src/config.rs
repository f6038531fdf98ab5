//! Configuration management for the search layer.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::engine::RegistrationMode;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Version of the indexed content format.
///
/// Bump this whenever the indexers change what they write, so the next start
/// registers a fresh index and retires the old one.
pub const SCHEMA_VERSION: u32 = 1;

/// Prefix shared by all versions of the search content index.
pub const INDEX_NAME_PREFIX: &str = "search_content_v";

/// Maximum number of results a single search delivers.
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// The index name for the current schema version.
pub fn default_index_name() -> String {
    format!("{}{}", INDEX_NAME_PREFIX, SCHEMA_VERSION)
}

/// Configuration for the search layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Name the index is registered under (default: `search_content_v1`)
    pub index_name: String,

    /// Results delivered per search before enumeration stops (default: 500)
    pub max_results: usize,

    /// How the index is registered at startup (default: async)
    pub registration_mode: RegistrationMode,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl SearchConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SEARCH_INDEX_NAME`: Stable index name (default: `search_content_v1`)
    /// - `SEARCH_MAX_RESULTS`: Result cap per search (default: 500)
    /// - `SEARCH_REGISTRATION_MODE`: `async` or `sync` (default: `async`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let index_name = env::var("SEARCH_INDEX_NAME").unwrap_or_else(|_| default_index_name());
        Self::validate_index_name(&index_name)?;

        let max_results = Self::parse_env_usize("SEARCH_MAX_RESULTS", DEFAULT_MAX_RESULTS)?;
        if max_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MAX_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let registration_mode = match env::var("SEARCH_REGISTRATION_MODE") {
            Ok(val) => val.parse::<RegistrationMode>()?,
            Err(_) => RegistrationMode::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(SearchConfig {
            index_name,
            max_results,
            registration_mode,
            log_level,
        })
    }

    /// Index names must be non-empty identifiers.
    fn validate_index_name(name: &str) -> ConfigResult<()> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_INDEX_NAME".to_string(),
                reason: format!("Must be a non-empty identifier of [A-Za-z0-9_], got: {:?}", name),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            index_name: default_index_name(),
            max_results: DEFAULT_MAX_RESULTS,
            registration_mode: RegistrationMode::Async,
            log_level: "warn".to_string(),
        }
    }
}
