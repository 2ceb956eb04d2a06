// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Membership-only prefix index.

use super::config::TrieConfig;
use super::engine::TrieEngine;
use super::error::Result;
use super::index::PrefixIndex;

/// Prefix index without payloads: membership tests, prefix counts and
/// autocomplete-style searches over a vocabulary.
///
/// # Examples
///
/// ```
/// use lexikon_lib::data_structures::prefix_trie::{ExistenceIndex, PrefixIndex};
///
/// let mut index = ExistenceIndex::new();
/// index.add("Cat");
/// index.add("car");
///
/// assert!(index.contains_full_word("cat"));
/// assert_eq!(index.prefix_count("ca"), 2);
/// assert_eq!(index.search_prefix("ca"), vec!["car", "cat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExistenceIndex {
    engine: TrieEngine<()>,
}

impl ExistenceIndex {
    /// Creates an empty index with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index, rejecting an invalid configuration.
    pub fn with_config(config: TrieConfig) -> Result<Self> {
        Ok(Self {
            engine: TrieEngine::with_config(config)?,
        })
    }

    /// Inserts `word`. Blank words are ignored.
    pub fn add(&mut self, word: &str) {
        self.engine.insert(word);
    }
}

impl PrefixIndex for ExistenceIndex {
    type Payload = ();

    fn engine(&self) -> &TrieEngine<()> {
        &self.engine
    }
}

impl<S: AsRef<str>> Extend<S> for ExistenceIndex {
    fn extend<T: IntoIterator<Item = S>>(&mut self, words: T) {
        for word in words {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExistenceIndex {
    fn from_iter<T: IntoIterator<Item = S>>(words: T) -> Self {
        let mut index = Self::new();
        index.extend(words);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn vocabulary() -> ExistenceIndex {
        ["cat", "car", "card", "dog"].into_iter().collect()
    }

    #[test_case("ca", 3 ; "shared prefix")]
    #[test_case("car", 2 ; "word that prefixes another")]
    #[test_case("do", 1 ; "single branch")]
    #[test_case("x", 0 ; "missing path")]
    #[test_case("cards", 0 ; "longer than any word")]
    #[test_case("", 4 ; "empty prefix counts everything")]
    fn test_prefix_count(prefix: &str, expected: usize) {
        assert_eq!(vocabulary().prefix_count(prefix), expected);
    }

    #[test]
    fn test_contains_versus_full_word() {
        let index = vocabulary();

        assert!(index.contains("ca"));
        assert!(!index.contains_full_word("ca"));
        assert!(index.contains("car"));
        assert!(index.contains_full_word("car"));
        assert!(!index.contains("cow"));
        assert!(!index.contains_full_word("cow"));
    }

    #[test]
    fn test_search_prefix_order() {
        let index = vocabulary();
        assert_eq!(index.search_prefix("ca"), vec!["car", "card", "cat"]);
        assert_eq!(index.search_prefix("car"), vec!["car", "card"]);
        assert_eq!(index.search_prefix_with_limit("ca", 1), vec!["car"]);
        assert!(index.search_prefix_with_limit("ca", 0).is_empty());
        assert!(index.search_prefix("z").is_empty());
    }

    #[test]
    fn test_duplicates_count_but_are_listed_once() {
        let mut index = ExistenceIndex::new();
        for _ in 0..3 {
            index.add("echo");
        }

        assert_eq!(index.word_count(), 3);
        assert_eq!(index.prefix_count("ec"), 3);
        assert_eq!(index.distinct_word_count(), 1);
        assert_eq!(index.search_prefix("e"), vec!["echo"]);
    }

    #[test]
    fn test_blank_words_are_ignored() {
        let mut index = ExistenceIndex::new();
        index.add("");
        index.add(" \t ");

        assert!(index.is_empty());
        assert_eq!(index.node_count(), 1);
    }

    #[test_case(true, true ; "case folded")]
    #[test_case(false, false ; "case sensitive")]
    fn test_case_folding(ignore_case: bool, found: bool) {
        let config = TrieConfig::new().with_ignore_case(ignore_case);
        let mut index = ExistenceIndex::with_config(config).unwrap();
        index.add("Bob");

        assert_eq!(index.contains_full_word("bob"), found);
        assert!(index.contains_full_word("Bob"));
    }

    #[test]
    fn test_case_folded_search_reports_folded_words() {
        let mut index = ExistenceIndex::new();
        index.add("Berlin");
        assert_eq!(index.search_prefix("BER"), vec!["berlin"]);
    }

    #[test]
    fn test_default_ceiling_applies() {
        let config = TrieConfig::new().with_max_results(2);
        let mut index = ExistenceIndex::with_config(config).unwrap();
        index.extend(["aa", "ab", "ac"]);

        assert_eq!(index.search_prefix("a"), vec!["aa", "ab"]);
        assert_eq!(index.search_prefix_with_limit("a", 10).len(), 3);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        assert!(ExistenceIndex::with_config(TrieConfig::new().with_max_results(0)).is_err());
    }
}
