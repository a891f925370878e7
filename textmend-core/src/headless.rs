// textmend-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the repair engine in one-shot mode.
//! Provides helper functions for a full repair of a single string without
//! any engine plumbing on the caller's side.

use anyhow::Result;

use crate::config::RepairConfig;
use crate::engine::RepairEngine;
use crate::engines::literal::LiteralEngine;

/// Fully repairs an input string by applying every rule and collapsing
/// whitespace. This function is the primary entry point for embedding the
/// library without holding an engine.
///
/// # Arguments
///
/// * `config` - The merged RepairConfig (defaults + optional user overrides).
/// * `content` - The string to be repaired.
/// * `source_id` - A stable identifier for the input (file path or pseudo id).
pub fn repair_string(config: RepairConfig, content: &str, source_id: &str) -> Result<String> {
    let engine = LiteralEngine::new(config)?;
    let (repaired, _) = engine.repair(content, source_id)?;
    Ok(repaired)
}
