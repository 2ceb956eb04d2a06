//! Data structures for Lexikon.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Deterministic iteration order for anything a caller can observe
//! - No hidden global state

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{ExistenceIndex, PostingIndex, PrefixIndex, SharedIndex, ValueIndex};
