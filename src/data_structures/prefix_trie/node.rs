// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix trie.
//!
//! Nodes live in a flat arena owned by the trie and refer to their children by
//! index. A `BTreeMap` keeps children in ascending character order so every
//! traversal visits them the same way.

use std::collections::BTreeMap;

/// Index of a node inside the trie arena.
pub type NodeId = usize;

/// Arena index of the root node (the empty prefix).
pub const ROOT: NodeId = 0;

/// A vertex of the prefix trie.
///
/// `P` is the payload slot: `()` for plain membership, a posting list, or an
/// optional value. The payload is only meaningful when `is_terminal` is set.
#[derive(Debug, Clone)]
pub struct TrieNode<P> {
    /// Child nodes keyed by the next character, in ascending order
    pub children: BTreeMap<char, NodeId>,

    /// Number of insertions whose path passes through this node
    pub occurrences: usize,

    /// Whether some inserted word ends exactly here
    pub is_terminal: bool,

    /// Data attached to the word ending here
    pub payload: P,
}

impl<P: Default> TrieNode<P> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            occurrences: 0,
            is_terminal: false,
            payload: P::default(),
        }
    }
}

impl<P: Default> Default for TrieNode<P> {
    fn default() -> Self {
        Self::new()
    }
}
