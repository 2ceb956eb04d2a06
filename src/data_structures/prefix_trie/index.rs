// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Read-side operations common to every prefix trie index.

use super::config::TrieConfig;
use super::engine::{TrieEngine, TrieStats};

/// Lookup and prefix-search surface shared by the existence, posting and
/// value indexes.
///
/// Implementors only expose their engine; every query is provided here so the
/// three indexes stay call-compatible.
pub trait PrefixIndex {
    /// Data stored on terminal nodes.
    type Payload;

    /// The underlying trie engine.
    fn engine(&self) -> &TrieEngine<Self::Payload>;

    /// True if some inserted word starts with `word` (or equals it).
    fn contains(&self, word: &str) -> bool {
        self.engine().contains(word)
    }

    /// True only if `word` itself was inserted.
    fn contains_full_word(&self, word: &str) -> bool {
        self.engine().contains_full_word(word)
    }

    /// Number of insertions whose (folded, truncated) word starts with `prefix`.
    fn prefix_count(&self, prefix: &str) -> usize {
        self.engine().prefix_count(prefix)
    }

    /// Total accepted insertions, duplicates included.
    fn word_count(&self) -> usize {
        self.engine().word_count()
    }

    /// Number of distinct indexed words (terminal nodes).
    fn distinct_word_count(&self) -> usize {
        self.engine().distinct_word_count()
    }

    /// Number of trie nodes, root included.
    fn node_count(&self) -> usize {
        self.engine().node_count()
    }

    /// True if nothing was inserted yet.
    fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    /// Counters describing the index.
    fn stats(&self) -> TrieStats {
        self.engine().stats()
    }

    /// Construction-time configuration.
    fn config(&self) -> &TrieConfig {
        self.engine().config()
    }

    /// Words starting with `prefix`, bounded by the configured default ceiling.
    fn search_prefix(&self, prefix: &str) -> Vec<String> {
        self.search_prefix_with_limit(prefix, self.config().max_results())
    }

    /// Words starting with `prefix`, at most `max` of them.
    ///
    /// The prefix itself comes first when it is a word, followed by longer
    /// words in depth-first, ascending character order.
    fn search_prefix_with_limit(&self, prefix: &str, max: usize) -> Vec<String> {
        let mut words = Vec::new();
        self.engine().walk_prefix(prefix, max, |word, _| {
            words.push(word.to_owned());
            true
        });
        words
    }
}
