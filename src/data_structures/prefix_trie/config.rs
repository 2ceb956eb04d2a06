// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Construction-time configuration shared by every prefix trie index.

use super::error::{PrefixTrieError, Result};

/// Default ceiling on the number of words a prefix search returns.
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Configuration for a prefix trie index.
///
/// The configuration is fixed once an index is built: changing case folding or
/// truncation after words were inserted would leave paths that no lookup can
/// reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Lower-case every character before it is used as a key
    ignore_case: bool,

    /// Number of leading characters kept on insert, `None` keeps the whole word
    prefix_length: Option<usize>,

    /// Default ceiling for search operations that take no explicit limit
    max_results: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - ignore_case: true
    /// - prefix_length: None (no truncation)
    /// - max_results: 200
    pub fn new() -> Self {
        Self {
            ignore_case: true,
            prefix_length: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set whether keys are case-folded before insertion and lookup.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Truncate inserted words to their first `prefix_length` characters.
    ///
    /// Words sharing the truncated prefix end on the same terminal node and
    /// their payloads accumulate there. This trades per-word precision for a
    /// much smaller tree on large vocabularies.
    pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    /// Set the default result ceiling used by searches without an explicit limit.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Whether keys are case-folded.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// The truncation length, if any.
    pub fn prefix_length(&self) -> Option<usize> {
        self.prefix_length
    }

    /// The default search ceiling.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Checks the configuration, rejecting values no index can work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(PrefixTrieError::InvalidMaxResults(self.max_results));
        }
        if let Some(0) = self.prefix_length {
            return Err(PrefixTrieError::InvalidPrefixLength(0));
        }
        Ok(())
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrieConfig::default();
        assert!(config.ignore_case());
        assert_eq!(config.prefix_length(), None);
        assert_eq!(config.max_results(), DEFAULT_MAX_RESULTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = TrieConfig::new()
            .with_ignore_case(false)
            .with_prefix_length(3)
            .with_max_results(10);

        assert!(!config.ignore_case());
        assert_eq!(config.prefix_length(), Some(3));
        assert_eq!(config.max_results(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = TrieConfig::new().with_max_results(0);
        assert_eq!(config.validate(), Err(PrefixTrieError::InvalidMaxResults(0)));

        let config = TrieConfig::new().with_prefix_length(0);
        assert_eq!(config.validate(), Err(PrefixTrieError::InvalidPrefixLength(0)));
    }
}
