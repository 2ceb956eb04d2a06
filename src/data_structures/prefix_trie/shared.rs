// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reader/writer wrapper for sharing an index across threads.
//!
//! The indexes are plain single-writer trees. Node creation and payload
//! updates are not atomic with respect to traversal, so writers must be
//! exclusive and readers must not overlap a write. `SharedIndex` enforces
//! exactly that with one `parking_lot::RwLock` around the whole index.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::index::PrefixIndex;

/// Cloneable handle to an index behind a reader/writer lock.
///
/// # Examples
///
/// ```
/// use lexikon_lib::data_structures::prefix_trie::{ExistenceIndex, SharedIndex};
///
/// let shared = SharedIndex::new(ExistenceIndex::new());
/// shared.write().add("kona");
/// assert!(shared.contains_full_word("kona"));
/// ```
#[derive(Debug)]
pub struct SharedIndex<I> {
    inner: Arc<RwLock<I>>,
}

impl<I> SharedIndex<I> {
    /// Wraps `index` for shared use.
    pub fn new(index: I) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    /// Shared access; any number of readers may hold this at once.
    pub fn read(&self) -> RwLockReadGuard<'_, I> {
        self.inner.read()
    }

    /// Exclusive access for inserts.
    pub fn write(&self) -> RwLockWriteGuard<'_, I> {
        self.inner.write()
    }

    /// Returns the index if this is the last handle, or the handle otherwise.
    pub fn try_into_inner(self) -> Result<I, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<I: PrefixIndex> SharedIndex<I> {
    /// See [`PrefixIndex::contains`].
    pub fn contains(&self, word: &str) -> bool {
        self.read().contains(word)
    }

    /// See [`PrefixIndex::contains_full_word`].
    pub fn contains_full_word(&self, word: &str) -> bool {
        self.read().contains_full_word(word)
    }

    /// See [`PrefixIndex::prefix_count`].
    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.read().prefix_count(prefix)
    }

    /// See [`PrefixIndex::word_count`].
    pub fn word_count(&self) -> usize {
        self.read().word_count()
    }

    /// See [`PrefixIndex::search_prefix_with_limit`].
    pub fn search_prefix(&self, prefix: &str, max: usize) -> Vec<String> {
        self.read().search_prefix_with_limit(prefix, max)
    }
}

impl<I> Clone for SharedIndex<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
