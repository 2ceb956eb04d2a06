// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Inverted prefix index mapping each word to the ids it was added with.

use hashbrown::HashSet;

use super::config::TrieConfig;
use super::engine::TrieEngine;
use super::error::Result;
use super::index::PrefixIndex;

/// Identifier attached to an indexed word (document, record or term id).
pub type PostingId = u64;

/// Insertion-ordered set of ids for a single word.
///
/// The vector keeps first-insertion order, the hash set answers membership so
/// repeated ids are dropped in constant time.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    ids: Vec<PostingId>,
    seen: HashSet<PostingId>,
}

impl PostingList {
    /// Creates an empty posting list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless already present. Returns `true` if it was added.
    pub fn insert(&mut self, id: PostingId) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Whether `id` is in the list.
    pub fn contains(&self, id: PostingId) -> bool {
        self.seen.contains(&id)
    }

    /// Ids in first-insertion order.
    pub fn as_slice(&self) -> &[PostingId] {
        &self.ids
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Prefix index whose words carry a deduplicated, insertion-ordered id list.
///
/// With a configured `prefix_length`, every word sharing the truncated prefix
/// lands on one terminal and their ids merge into one posting list.
///
/// # Examples
///
/// ```
/// use lexikon_lib::data_structures::prefix_trie::{PostingIndex, PrefixIndex};
///
/// let mut index = PostingIndex::new();
/// index.add("cat", 5);
/// index.add("catalog", 7);
/// index.add("cat", 5);
///
/// assert_eq!(index.postings_for_word("cat"), Some(&[5][..]));
/// assert_eq!(index.search_prefix_for_indexes("cat"), vec![5, 7]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostingIndex {
    engine: TrieEngine<PostingList>,
}

impl PostingIndex {
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

    /// Inserts `word` and records `id` on its terminal node.
    ///
    /// Blank words are ignored. An id already present for the word is not
    /// appended again, but the insertion still counts toward word and prefix
    /// counts.
    pub fn add(&mut self, word: &str, id: PostingId) {
        if let Some(terminal) = self.engine.insert(word) {
            self.engine.payload_mut(terminal).insert(id);
        }
    }

    /// Ids recorded for exactly `word`, in insertion order.
    pub fn postings_for_word(&self, word: &str) -> Option<&[PostingId]> {
        self.engine
            .find_terminal(word)
            .map(|id| self.engine.node(id).payload.as_slice())
    }

    /// Ids of the words starting with `prefix`, using the default ceiling.
    pub fn search_prefix_for_indexes(&self, prefix: &str) -> Vec<PostingId> {
        self.search_prefix_for_indexes_with_limit(prefix, self.config().max_results())
    }

    /// Ids of the first `max` words starting with `prefix`.
    ///
    /// `max` bounds the number of words visited, not the ids returned: each
    /// visited word contributes its whole posting list. Ids shared by several
    /// words appear once per word.
    pub fn search_prefix_for_indexes_with_limit(&self, prefix: &str, max: usize) -> Vec<PostingId> {
        let mut ids = Vec::new();
        self.engine.walk_prefix(prefix, max, |_, postings| {
            ids.extend_from_slice(postings.as_slice());
            true
        });
        ids
    }
}

impl PrefixIndex for PostingIndex {
    type Payload = PostingList;

    fn engine(&self) -> &TrieEngine<PostingList> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_list_deduplicates_in_order() {
        let mut list = PostingList::new();
        assert!(list.insert(3));
        assert!(list.insert(1));
        assert!(!list.insert(3));
        assert!(list.insert(2));

        assert_eq!(list.as_slice(), &[3, 1, 2]);
        assert_eq!(list.len(), 3);
        assert!(list.contains(1));
        assert!(!list.contains(4));
    }

    #[test]
    fn test_add_deduplicates_ids() {
        let mut index = PostingIndex::new();
        index.add("cat", 5);
        index.add("cat", 5);
        index.add("Cat", 6);

        assert_eq!(index.postings_for_word("cat"), Some(&[5, 6][..]));
        assert_eq!(index.word_count(), 3);
        assert_eq!(index.prefix_count("c"), 3);
    }

    #[test]
    fn test_postings_for_word_requires_terminal() {
        let mut index = PostingIndex::new();
        index.add("card", 1);

        assert_eq!(index.postings_for_word("car"), None);
        assert_eq!(index.postings_for_word("cart"), None);
        assert_eq!(index.postings_for_word("card"), Some(&[1][..]));
    }

    #[test]
    fn test_search_limit_bounds_words_not_ids() {
        let mut index = PostingIndex::new();
        index.add("ant", 1);
        index.add("ant", 2);
        index.add("ape", 3);
        index.add("art", 4);

        assert_eq!(index.search_prefix_for_indexes_with_limit("a", 1), vec![1, 2]);
        assert_eq!(index.search_prefix_for_indexes_with_limit("a", 2), vec![1, 2, 3]);
        assert_eq!(index.search_prefix_for_indexes("a"), vec![1, 2, 3, 4]);
        assert!(index.search_prefix_for_indexes_with_limit("a", 0).is_empty());
        assert!(index.search_prefix_for_indexes("b").is_empty());
    }

    #[test]
    fn test_truncation_merges_postings() {
        let config = TrieConfig::new().with_prefix_length(2);
        let mut index = PostingIndex::with_config(config).unwrap();
        index.add("catalog", 1);
        index.add("cater", 2);

        assert_eq!(index.search_prefix_for_indexes_with_limit("ca", 10), vec![1, 2]);
        assert_eq!(index.search_prefix("ca"), vec!["ca"]);
        assert_eq!(index.postings_for_word("ca"), Some(&[1, 2][..]));
        assert!(!index.contains("cat"));
        assert_eq!(index.prefix_count("ca"), 2);
    }

    #[test]
    fn test_blank_word_records_nothing() {
        let mut index = PostingIndex::new();
        index.add("  ", 9);

        assert!(index.is_empty());
        assert!(index.search_prefix_for_indexes("").is_empty());
    }
}
