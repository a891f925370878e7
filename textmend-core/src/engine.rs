// textmend-core/src/engine.rs
//! Defines the core RepairEngine trait and related data structures.
//!
//! The `RepairEngine` trait provides a pluggable interface for different
//! repair strategies. This module defines the contract that all such engines
//! must adhere to, ensuring a consistent and interchangeable core API for
//! `textmend`.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::RepairConfig;
use crate::rules::compiler::CompiledRules;
use crate::summary::RepairSummaryItem;

/// A trait that defines the core functionality of a repair engine.
///
/// This trait decouples the high-level application logic from the specific
/// implementation of a repair method, allowing for different engines to be
/// used interchangeably.
pub trait RepairEngine: Send + Sync {
    /// Performs a full repair pass on the provided content.
    ///
    /// This method applies every rule in order, collapses whitespace runs,
    /// trims the result, and reports which rules fired. It returns the
    /// repaired content and a summary of all replacements.
    ///
    /// # Arguments
    /// * `content` - The input string to repair.
    /// * `source_id` - The name or identifier of the source being processed.
    fn repair(&self, content: &str, source_id: &str)
        -> Result<(String, Vec<RepairSummaryItem>)>;

    /// Analyzes the provided content for corruption without repairing it.
    ///
    /// Returns a summary of all rule hits; the original content is not
    /// modified. Used for dry runs and statistics.
    ///
    /// # Arguments
    /// * `content` - The input string to scan.
    /// * `source_id` - An identifier for the source of the content (e.g., a file path).
    fn analyze(&self, content: &str, source_id: &str) -> Result<Vec<RepairSummaryItem>>;

    /// Returns true when `content` contains at least one marker substring.
    ///
    /// This is the cheap pre-filter: content without markers is already
    /// clean, and callers can skip the full repair pass (and any rewrite)
    /// entirely.
    fn needs_repair(&self, content: &str) -> bool;

    /// Returns a reference to the `CompiledRules` used by the engine.
    ///
    /// This is used by external components to display information about the
    /// active rules without needing to recompile them.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &RepairConfig;
}
