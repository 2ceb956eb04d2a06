// Copyright (c) 2025 Lexikon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix trie indexes.
//!
//! Only construction-time configuration can fail. Lookups and inserts report
//! "not found" or skip blank input instead of returning errors.

/// Errors that can occur when building a prefix trie index.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixTrieError {
    /// The default result ceiling must allow at least one result.
    #[error("Invalid max_results: {0} (must be greater than 0)")]
    InvalidMaxResults(usize),

    /// A truncation length must keep at least one character.
    #[error("Invalid prefix_length: {0} (must be at least 1 when set)")]
    InvalidPrefixLength(usize),
}

/// Result type for prefix trie operations.
pub type Result<T> = std::result::Result<T, PrefixTrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PrefixTrieError::InvalidMaxResults(0);
        assert_eq!(err.to_string(), "Invalid max_results: 0 (must be greater than 0)");

        let err = PrefixTrieError::InvalidPrefixLength(0);
        assert_eq!(
            err.to_string(),
            "Invalid prefix_length: 0 (must be at least 1 when set)"
        );
    }
}
