//! Prefix index configuration module.
//!
//! Mirrors the construction-time options of the prefix trie indexes so they
//! can be set from configuration files and environment variables.

use super::{ConfigResult, Validate};
use crate::data_structures::prefix_trie::{TrieConfig, DEFAULT_MAX_RESULTS};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Prefix index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Whether words and queries are lower-cased before use
    pub ignore_case: bool,

    /// Number of leading characters kept per inserted word (unset keeps all)
    pub prefix_length: Option<usize>,

    /// Default ceiling for prefix searches
    pub max_results: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            ignore_case: true,
            prefix_length: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie_config()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

impl IndexConfig {
    /// Builds the trie configuration described by this section.
    pub fn trie_config(&self) -> TrieConfig {
        let config = TrieConfig::new()
            .with_ignore_case(self.ignore_case)
            .with_max_results(self.max_results);
        match self.prefix_length {
            Some(length) => config.with_prefix_length(length),
            None => config,
        }
    }
}

impl From<&IndexConfig> for TrieConfig {
    fn from(config: &IndexConfig) -> Self {
        config.trie_config()
    }
}
