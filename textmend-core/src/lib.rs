// textmend-core/src/lib.rs
//! # textmend Core Library
//!
//! `textmend-core` provides the fundamental, platform-independent logic for
//! repairing mojibake: text corrupted by decoding UTF-8 bytes with the wrong
//! character encoding. It defines the core data structures for repair rules,
//! provides mechanisms for validating and freezing these rules, and
//! implements a pluggable `RepairEngine` trait for applying repair logic.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input data based on defined rules, without concerns for
//! I/O or application-specific state management.
//!
//! ## Modules
//!
//! * `config`: Defines `RepairRule`s and `RepairConfig` for specifying corrupted patterns.
//! * `rules`: Contains the logic for validating and freezing rule tables.
//! * `engine`: Defines the `RepairEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `RepairEngine` trait.
//! * `summary`: Defines the per-rule hit report returned by a repair pass.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Usage Example
//!
//! ```rust
//! use textmend_core::{RepairConfig, repair_string};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in repair rules.
//!     let config = RepairConfig::load_default_rules()?;
//!
//!     // 2. Prepare some corrupted content.
//!     let input = "It\u{e2}\u{20ac}\u{2122}s   here";
//!
//!     // 3. Repair it in a single call.
//!     let repaired = repair_string(config, input, "example.txt")?;
//!     assert_eq!(repaired, "It's here");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! A repair pass is deterministic and idempotent: replacements are ASCII and
//! are validated never to reintroduce any rule's pattern, and whitespace
//! collapsing is itself idempotent. Applying the engine twice yields the same
//! result as applying it once.
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible operations and defines the
//! specific `TextmendError` type for clearer error reporting.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;
pub mod summary;

/// Re-exports the public configuration types and functions for managing repair rules.
pub use config::{merge_rules, RepairConfig, RepairRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TextmendError;

/// Re-exports types related to the core repair engine trait.
pub use engine::RepairEngine;

/// Re-exports the concrete `LiteralEngine` implementation from its canonical location.
pub use engines::literal::{collapse_whitespace, LiteralEngine};

/// Re-exports the per-rule hit report type.
pub use summary::RepairSummaryItem;

/// Re-exports the one-shot helper for non-interactive use.
pub use headless::repair_string;

/// Re-exports key types from the rules::compiler module for advanced usage.
pub use rules::compiler::{compile_rules, CompiledRule, CompiledRules};
