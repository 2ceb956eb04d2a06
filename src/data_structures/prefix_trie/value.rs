// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix index holding one value per word.

use super::config::TrieConfig;
use super::engine::TrieEngine;
use super::error::Result;
use super::index::PrefixIndex;

/// Prefix index whose words carry a single value of type `V`.
///
/// The last `Some` written for a word wins; adding a word with `None` keeps
/// whatever value it already had.
///
/// # Examples
///
/// ```
/// use lexikon_lib::data_structures::prefix_trie::ValueIndex;
///
/// let mut index = ValueIndex::new();
/// index.add("cat", Some("feline"));
/// index.add("cat", None);
///
/// assert_eq!(index.get_data_for_word("cat"), Some(&"feline"));
/// assert_eq!(index.search_prefix_for_data("c"), vec![&"feline"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValueIndex<V> {
    engine: TrieEngine<Option<V>>,
}

impl<V> ValueIndex<V> {
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        Self {
            engine: TrieEngine::default(),
        }
    }

    /// Creates an empty index, rejecting an invalid configuration.
    pub fn with_config(config: TrieConfig) -> Result<Self> {
        Ok(Self {
            engine: TrieEngine::with_config(config)?,
        })
    }

    /// Inserts `word`, storing `value` when it is `Some`.
    ///
    /// Blank words are ignored. `None` never erases a stored value.
    pub fn add(&mut self, word: &str, value: Option<V>) {
        let Some(terminal) = self.engine.insert(word) else {
            return;
        };
        if let Some(value) = value {
            *self.engine.payload_mut(terminal) = Some(value);
        }
    }

    /// Value stored for exactly `word`.
    ///
    /// Returns `None` when the word was never inserted, is only a prefix of
    /// inserted words, or was inserted without a value.
    pub fn get_data_for_word(&self, word: &str) -> Option<&V> {
        self.engine
            .find_terminal(word)
            .and_then(|id| self.engine.node(id).payload.as_ref())
    }

    /// Values of the words starting with `prefix`, using the default ceiling.
    pub fn search_prefix_for_data(&self, prefix: &str) -> Vec<&V> {
        self.search_prefix_for_data_with_limit(prefix, self.config().max_results())
    }

    /// Up to `max` values of the words starting with `prefix`.
    ///
    /// Words without a value are skipped and do not count toward `max`.
    pub fn search_prefix_for_data_with_limit(&self, prefix: &str, max: usize) -> Vec<&V> {
        let mut values = Vec::new();
        self.engine.walk_prefix(prefix, max, |_, slot| match slot {
            Some(value) => {
                values.push(value);
                true
            }
            None => false,
        });
        values
    }
}

impl<V> Default for ValueIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixIndex for ValueIndex<V> {
    type Payload = Option<V>;

    fn engine(&self) -> &TrieEngine<Option<V>> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_erases() {
        let mut index = ValueIndex::new();
        index.add("cat", Some("A".to_string()));
        index.add("cat", None);
        assert_eq!(index.get_data_for_word("cat").map(String::as_str), Some("A"));

        index.add("cat", Some("B".to_string()));
        assert_eq!(index.get_data_for_word("cat").map(String::as_str), Some("B"));
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn test_get_data_requires_terminal() {
        let mut index = ValueIndex::new();
        index.add("card", Some(1));
        index.add("cab", None);

        assert_eq!(index.get_data_for_word("card"), Some(&1));
        assert_eq!(index.get_data_for_word("car"), None);
        assert_eq!(index.get_data_for_word("cab"), None);
        assert_eq!(index.get_data_for_word("dog"), None);
        assert_eq!(index.get_data_for_word("CARD"), Some(&1));
    }

    #[test]
    fn test_search_skips_missing_values() {
        let mut index = ValueIndex::new();
        index.add("ba", None);
        index.add("bb", Some(2));
        index.add("bc", Some(3));
        index.add("bd", Some(4));

        assert_eq!(index.search_prefix_for_data_with_limit("b", 2), vec![&2, &3]);
        assert_eq!(index.search_prefix_for_data("b"), vec![&2, &3, &4]);
        assert_eq!(index.search_prefix("b"), vec!["ba", "bb", "bc", "bd"]);
        assert!(index.search_prefix_for_data_with_limit("b", 0).is_empty());
    }

    #[test]
    fn test_truncation_keeps_last_value() {
        let config = TrieConfig::new().with_prefix_length(3);
        let mut index = ValueIndex::with_config(config).unwrap();
        index.add("station", Some("first"));
        index.add("stationery", Some("second"));

        assert_eq!(index.get_data_for_word("sta"), Some(&"second"));
        assert_eq!(index.get_data_for_word("station"), None);
        assert_eq!(index.distinct_word_count(), 1);
    }
}
