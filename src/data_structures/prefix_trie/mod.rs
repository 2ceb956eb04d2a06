// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix trie indexes for vocabulary lookup and autocomplete.
//!
//! Three call-compatible indexes share one trie engine:
//!
//! - [`ExistenceIndex`]: membership, prefix counts and prefix search.
//! - [`PostingIndex`]: each word carries a deduplicated, insertion-ordered
//!   list of ids (an inverted index).
//! - [`ValueIndex`]: each word carries one value, last non-empty write wins.
//!
//! The shared queries live on the [`PrefixIndex`] trait.
//!
//! # Matching rules
//!
//! - Matching is exact-prefix only.
//! - With `ignore_case` (the default) words and queries are lower-cased before
//!   they touch the tree, and searches report the lower-cased words.
//! - Blank words are silently ignored on insert.
//! - Every search has a result ceiling. Searches without an explicit limit use
//!   the configured `max_results` (200 by default); a limit of zero returns
//!   nothing.
//! - Results come out depth-first with children in ascending character order,
//!   so identical tries always answer identically.
//!
//! # Compact mode
//!
//! Setting `prefix_length` truncates every inserted word to its leading
//! characters. Words sharing that prefix collapse onto one terminal node and
//! their ids or values merge. Lookups are not truncated, so the collapsed
//! entry is reached through the truncated form.
//!
//! ```
//! use lexikon_lib::data_structures::prefix_trie::{PostingIndex, PrefixIndex, TrieConfig};
//!
//! let config = TrieConfig::new().with_prefix_length(2);
//! let mut index = PostingIndex::with_config(config).unwrap();
//! index.add("catalog", 1);
//! index.add("cater", 2);
//!
//! assert_eq!(index.search_prefix("ca"), vec!["ca"]);
//! assert_eq!(index.search_prefix_for_indexes("ca"), vec![1, 2]);
//! ```
//!
//! # Concurrency
//!
//! Indexes are single-writer values with no internal locking. Wrap one in a
//! [`SharedIndex`] to share it between threads.

// Module declarations
mod config;
mod engine;
mod error;
mod existence;
mod index;
mod node;
mod posting;
mod shared;
mod value;

#[cfg(test)]
mod tests;

// Re-exports
pub use config::{TrieConfig, DEFAULT_MAX_RESULTS};
pub use engine::{TrieEngine, TrieStats};
pub use error::{PrefixTrieError, Result};
pub use existence::ExistenceIndex;
pub use index::PrefixIndex;
pub use node::{NodeId, TrieNode};
pub use posting::{PostingId, PostingIndex, PostingList};
pub use shared::SharedIndex;
pub use value::ValueIndex;
