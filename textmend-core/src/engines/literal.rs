// textmend-core/src/engines/literal.rs
//! A `RepairEngine` implementation that applies an ordered table of literal
//! substring replacements, then collapses whitespace.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RepairConfig;
use crate::engine::RepairEngine;
use crate::rules::compiler::{compile_rules, CompiledRules};
use crate::summary::RepairSummaryItem;

/// Matches any run of one-or-more whitespace characters.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// The standard literal-table repair engine.
#[derive(Debug)]
pub struct LiteralEngine {
    compiled_rules: CompiledRules,
    config: RepairConfig,
}

impl LiteralEngine {
    pub fn new(config: RepairConfig) -> Result<Self> {
        let compiled_rules =
            compile_rules(&config).context("Failed to compile repair rules for LiteralEngine")?;

        Ok(Self {
            compiled_rules,
            config,
        })
    }

    /// Applies every rule in order, globally, and records per-rule hit counts.
    ///
    /// `str::replace` substitutes non-overlapping occurrences left to right,
    /// which is exactly the contract each rule carries.
    fn apply_rules(&self, content: &str) -> (String, Vec<RepairSummaryItem>) {
        let mut repaired = content.to_string();
        let mut summary = Vec::new();

        for rule in &self.compiled_rules.rules {
            let occurrences = repaired.matches(rule.pattern.as_str()).count();
            if occurrences == 0 {
                continue;
            }
            repaired = repaired.replace(rule.pattern.as_str(), &rule.replace_with);
            summary.push(RepairSummaryItem {
                rule_name: rule.name.clone(),
                occurrences,
            });
        }

        (repaired, summary)
    }
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(content: &str) -> String {
    WHITESPACE_RUN.replace_all(content, " ").trim().to_string()
}

impl RepairEngine for LiteralEngine {
    fn repair(&self, content: &str, source_id: &str)
        -> Result<(String, Vec<RepairSummaryItem>)>
    {
        let (replaced, summary) = self.apply_rules(content);
        let repaired = collapse_whitespace(&replaced);

        debug!(
            "Repaired '{}'. Original length: {}, repaired length: {}, rules hit: {}",
            source_id,
            content.len(),
            repaired.len(),
            summary.len()
        );

        Ok((repaired, summary))
    }

    fn analyze(&self, content: &str, source_id: &str) -> Result<Vec<RepairSummaryItem>> {
        let (_, summary) = self.apply_rules(content);
        debug!("Analyzed '{}': {} rules hit.", source_id, summary.len());
        Ok(summary)
    }

    fn needs_repair(&self, content: &str) -> bool {
        self.compiled_rules.contains_marker(content)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &RepairConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> LiteralEngine {
        let config = RepairConfig::load_default_rules().unwrap();
        LiteralEngine::new(config).unwrap()
    }

    #[test]
    fn repairs_smart_punctuation() {
        let engine = default_engine();
        let input = "He said \u{e2}\u{20ac}\u{153}wait\u{e2}\u{20ac}\u{9d} \u{e2}\u{20ac}\u{201d} twice";
        let (repaired, summary) = engine.repair(input, "test").unwrap();
        assert_eq!(repaired, "He said \"wait\" - twice");
        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn counts_every_occurrence() {
        let engine = default_engine();
        let input = "a\u{c2}b\u{c2}c\u{c2}d";
        let summary = engine.analyze(input, "test").unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].rule_name, "stray_artifact");
        assert_eq!(summary[0].occurrences, 3);
    }

    #[test]
    fn needs_repair_matches_marker_presence() {
        let engine = default_engine();
        assert!(engine.needs_repair("caf\u{c2}\u{a0}corner"));
        assert!(engine.needs_repair("It\u{e2}\u{20ac}\u{2122}s"));
        assert!(!engine.needs_repair("perfectly clean ascii text"));
        // The e-acute below is non-ASCII but not a marker.
        assert!(!engine.needs_repair("caf\u{e9} corner"));
    }

    #[test]
    fn collapse_whitespace_squashes_runs_and_trims() {
        assert_eq!(collapse_whitespace("  multiple   spaces  "), "multiple spaces");
        assert_eq!(collapse_whitespace("a\t\tb\n\nc"), "a b c");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
