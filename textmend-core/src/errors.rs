//! errors.rs - Custom error types for the textmend-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `textmend-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TextmendError {
    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule '{0}': replacement {1:?} is not ASCII-safe")]
    NonAsciiReplacement(String, String),

    #[error("Rule '{0}': pattern contains none of the configured marker substrings")]
    UnmarkedPattern(String),

    #[error("Rule '{0}': replacement reintroduces the pattern of rule '{1}'")]
    ReplacementCycle(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    // Add other specific error types as the project grows
    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
