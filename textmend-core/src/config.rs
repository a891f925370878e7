//! Configuration management for `textmend-core`.
//!
//! This module defines the core data structures for repair rules and the
//! marker substrings backing the quick filter. It handles
//! serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length, in bytes, for a rule's literal pattern.
pub const MAX_PATTERN_LENGTH: usize = 64;

/// Represents a single repair rule: a literal corrupted substring and the
/// ASCII text that replaces every occurrence of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RepairRule {
    /// Unique identifier for the rule (e.g., "right_single_quote").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The literal substring to search for.
    pub pattern: String,
    /// The string every occurrence is replaced with. May be empty (deletion).
    pub replace_with: String,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for RepairRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            replace_with: String::new(),
            enabled: None,
        }
    }
}

impl RepairRule {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Represents the top-level configuration structure for textmend.
///
/// Rule order is significant: rules are applied in the order they appear.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct RepairConfig {
    /// An ordered list of literal repair rules.
    pub rules: Vec<RepairRule>,
    /// Short substrings whose presence signals that a repair pass is worth
    /// running at all. Every rule pattern must contain at least one marker.
    #[serde(default)]
    pub markers: Vec<String>,
}

impl RepairConfig {
    /// Loads repair rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RepairConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in repair rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: RepairConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }
}

/// Merges user-defined rules and markers with the defaults.
///
/// Unlike a plain map merge, this preserves rule order: a user rule that
/// shares a name with a default rule replaces it in place, and any remaining
/// user rules are appended after the defaults in their own order. User
/// markers, when present, replace the default marker set wholesale.
pub fn merge_rules(
    default_config: RepairConfig,
    user_config: Option<RepairConfig>,
) -> RepairConfig {
    debug!(
        "merge_rules called. Initial default rules count: {}",
        default_config.rules.len()
    );

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());

    let mut user_rules = user_cfg.rules;
    let mut final_rules = Vec::with_capacity(default_config.rules.len() + user_rules.len());

    for default_rule in default_config.rules {
        if let Some(pos) = user_rules.iter().position(|r| r.name == default_rule.name) {
            final_rules.push(user_rules.remove(pos));
        } else {
            final_rules.push(default_rule);
        }
    }
    final_rules.append(&mut user_rules);

    let final_markers = if user_cfg.markers.is_empty() {
        default_config.markers
    } else {
        debug!("Overriding marker set with {} user markers.", user_cfg.markers.len());
        user_cfg.markers
    };

    debug!("Final total rules after merge: {}", final_rules.len());

    RepairConfig {
        rules: final_rules,
        markers: final_markers,
    }
}

/// Validates structural rule integrity (names, non-empty patterns).
fn validate_rules(rules: &[RepairRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
