// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Core insert, lookup and prefix-search algorithm shared by every index.

use std::borrow::Cow;
use std::collections::btree_map;

use serde::Serialize;

use super::config::TrieConfig;
use super::error::Result;
use super::node::{NodeId, TrieNode, ROOT};

/// Point-in-time counters describing a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Nodes in the arena, root included
    pub nodes: usize,

    /// Nodes at which at least one word ends
    pub terminals: usize,

    /// Accepted `add` calls, duplicates included
    pub insertions: usize,
}

/// Arena-backed character trie parameterized by its payload type.
///
/// The engine owns every node. Children are referenced by arena index, so the
/// tree is a plain owned structure without shared pointers or locks. Callers
/// needing concurrent access wrap the index in
/// [`SharedIndex`](super::SharedIndex).
#[derive(Debug, Clone)]
pub struct TrieEngine<P> {
    /// Node arena; index 0 is the root
    nodes: Vec<TrieNode<P>>,

    /// Configuration fixed at construction
    config: TrieConfig,

    /// Number of accepted insertions
    inserted: usize,
}

/// Blank input (empty or whitespace only) is never indexed.
fn is_blank(word: &str) -> bool {
    word.trim().is_empty()
}

/// Applies the case-folding policy to a word or prefix.
fn fold(word: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

impl<P: Default> TrieEngine<P> {
    /// Creates an empty engine after validating `config`.
    pub fn with_config(config: TrieConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            ignore_case = config.ignore_case(),
            prefix_length = ?config.prefix_length(),
            max_results = config.max_results(),
            "Creating prefix trie"
        );
        Ok(Self {
            nodes: vec![TrieNode::new()],
            config,
            inserted: 0,
        })
    }

    /// Inserts `word` and returns the id of its terminal node.
    ///
    /// The word is folded, then truncated to `prefix_length` characters when
    /// configured. Every node on the path, root included, has its occurrence
    /// counter bumped. Blank words are skipped and yield `None`.
    pub fn insert(&mut self, word: &str) -> Option<NodeId> {
        if is_blank(word) {
            tracing::trace!("Skipping blank word");
            return None;
        }

        let key = fold(word, self.config.ignore_case());
        let keep = self.config.prefix_length().unwrap_or(usize::MAX);

        let mut current = ROOT;
        self.nodes[ROOT].occurrences += 1;
        for c in key.chars().take(keep) {
            current = match self.nodes[current].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(c, child);
                    child
                }
            };
            self.nodes[current].occurrences += 1;
        }

        self.nodes[current].is_terminal = true;
        self.inserted += 1;
        Some(current)
    }
}

impl<P: Default> Default for TrieEngine<P> {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            config: TrieConfig::default(),
            inserted: 0,
        }
    }
}

impl<P> TrieEngine<P> {
    /// The configuration this engine was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the node at `id`.
    ///
    /// Ids come from [`insert`](Self::insert) or [`find`](Self::find) on the
    /// same engine and are always in bounds.
    pub fn node(&self, id: NodeId) -> &TrieNode<P> {
        &self.nodes[id]
    }

    /// Mutable access to the payload of node `id`.
    pub fn payload_mut(&mut self, id: NodeId) -> &mut P {
        &mut self.nodes[id].payload
    }

    /// Follows `prefix` (after case folding) from the root.
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        let key = fold(prefix, self.config.ignore_case());
        self.descend(&key)
    }

    fn descend(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(ROOT, |id, c| self.nodes[id].children.get(&c).copied())
    }

    /// Returns the terminal node for `word`, if `word` was inserted.
    pub fn find_terminal(&self, word: &str) -> Option<NodeId> {
        self.find(word).filter(|&id| self.nodes[id].is_terminal)
    }

    /// True if a path for `word` exists, even when it only prefixes a longer word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// True only if `word` itself was inserted.
    pub fn contains_full_word(&self, word: &str) -> bool {
        self.find_terminal(word).is_some()
    }

    /// Number of insertions sharing `prefix`; the empty prefix counts all of them.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        if prefix.is_empty() {
            return self.inserted;
        }
        self.find(prefix)
            .map_or(0, |id| self.nodes[id].occurrences)
    }

    /// Number of accepted insertions, duplicates included.
    pub fn word_count(&self) -> usize {
        self.inserted
    }

    /// Number of distinct terminal nodes.
    pub fn distinct_word_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_terminal).count()
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current counters.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            nodes: self.node_count(),
            terminals: self.distinct_word_count(),
            insertions: self.inserted,
        }
    }

    /// Depth-first walk over the terminals below `prefix`.
    ///
    /// The node for `prefix` is offered first, then its descendants in
    /// pre-order with children in ascending character order. `visit` receives
    /// the folded path and the node payload and returns whether it produced a
    /// result; the walk stops once `limit` results were produced. A limit of
    /// zero produces nothing.
    pub fn walk_prefix<'a, F>(&'a self, prefix: &str, limit: usize, mut visit: F)
    where
        F: FnMut(&str, &'a P) -> bool,
    {
        if limit == 0 {
            return;
        }
        let key = fold(prefix, self.config.ignore_case());
        let Some(start) = self.descend(&key) else {
            return;
        };

        let mut path = key.into_owned();
        let mut produced = 0;
        if self.offer(start, &path, &mut visit, &mut produced) && produced >= limit {
            return;
        }

        let mut stack: Vec<btree_map::Iter<'a, char, NodeId>> =
            vec![self.nodes[start].children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((&c, &child)) => {
                    path.push(c);
                    if self.offer(child, &path, &mut visit, &mut produced) && produced >= limit {
                        break;
                    }
                    stack.push(self.nodes[child].children.iter());
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        path.pop();
                    }
                }
            }
        }

        tracing::trace!(prefix, produced, limit, "Prefix walk finished");
    }

    /// Offers a terminal node to `visit`; returns whether a result was produced.
    fn offer<'a, F>(&'a self, id: NodeId, path: &str, visit: &mut F, produced: &mut usize) -> bool
    where
        F: FnMut(&str, &'a P) -> bool,
    {
        let node = &self.nodes[id];
        if node.is_terminal && visit(path, &node.payload) {
            *produced += 1;
            return true;
        }
        false
    }
}
