//! Test modules for Lexikon.
//!
//! Component tests live beside the code they cover; this module holds tests
//! that exercise the crate-level configuration and error layers.
