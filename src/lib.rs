//! Lexikon Library
//!
//! Prefix-trie vocabulary indexes for multilingual text processing. Upstream
//! components (encoding detection, language identification, stemming,
//! transliteration) produce normalized tokens; this library indexes them for
//! exact-prefix lookup and autocomplete-style queries.
//!
//! # Architecture
//!
//! - [`data_structures::prefix_trie`]: the existence, posting and value indexes
//! - [`vocabulary`]: plain-text token list ingestion
//! - [`config`]: file and environment configuration
//! - [`error`]: crate-wide error handling

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod vocabulary;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lexikon.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
