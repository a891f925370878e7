//! compiler.rs - Validates and freezes repair rules for application.
//!
//! Literal substring rules need no pattern compilation in the regex sense;
//! "compiling" here means filtering out disabled rules, checking the
//! invariants that make a single repair pass idempotent, and fixing the
//! application order once and for all.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};

use crate::config::{RepairConfig, MAX_PATTERN_LENGTH};
use crate::errors::TextmendError;

/// A single repair rule, validated and ready for application.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The literal substring to search for.
    pub pattern: String,
    /// The ASCII text every occurrence is replaced with.
    pub replace_with: String,
    /// The unique name of the repair rule.
    pub name: String,
}

/// The full validated rule table, in application order, plus the marker
/// substrings used for the cheap pre-scan.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    /// Rules in the exact order they are applied.
    pub rules: Vec<CompiledRule>,
    /// Marker substrings; content containing none of these is already clean.
    pub markers: Vec<String>,
}

impl CompiledRules {
    /// Returns true when `content` contains at least one marker substring.
    pub fn contains_marker(&self, content: &str) -> bool {
        self.markers.iter().any(|m| content.contains(m.as_str()))
    }
}

/// Compiles a `RepairConfig` into `CompiledRules`.
///
/// Disabled rules are dropped. Every surviving rule is checked against the
/// invariants: pattern length cap, ASCII-only replacement, marker coverage,
/// and no replacement containing any rule's pattern (which would let a second
/// pass observe text the first pass produced).
pub fn compile_rules(config: &RepairConfig) -> Result<CompiledRules, TextmendError> {
    debug!("Starting compilation of {} rules.", config.rules.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors: Vec<TextmendError> = Vec::new();

    for rule in &config.rules {
        if !rule.is_enabled() {
            warn!("Skipping rule '{}' because it is disabled.", &rule.name);
            continue;
        }

        debug!(
            "Validating rule: '{}' with pattern {:?}",
            &rule.name, &rule.pattern
        );

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(TextmendError::PatternLengthExceeded(
                rule.name.clone(),
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        if !rule.replace_with.is_ascii() {
            compilation_errors.push(TextmendError::NonAsciiReplacement(
                rule.name.clone(),
                rule.replace_with.clone(),
            ));
            continue;
        }

        if !config.markers.is_empty()
            && !config.markers.iter().any(|m| rule.pattern.contains(m.as_str()))
        {
            compilation_errors.push(TextmendError::UnmarkedPattern(rule.name.clone()));
            continue;
        }

        compiled_rules.push(CompiledRule {
            pattern: rule.pattern.clone(),
            replace_with: rule.replace_with.clone(),
            name: rule.name.clone(),
        });
    }

    // A replacement that contains any rule's pattern would re-corrupt
    // repaired text on the next pass.
    for producing in &compiled_rules {
        if producing.replace_with.is_empty() {
            continue;
        }
        for target in &compiled_rules {
            if producing.replace_with.contains(target.pattern.as_str()) {
                compilation_errors.push(TextmendError::ReplacementCycle(
                    producing.name.clone(),
                    target.name.clone(),
                ));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(TextmendError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {}.",
            compiled_rules.len()
        );
        Ok(CompiledRules {
            rules: compiled_rules,
            markers: config.markers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RepairConfig, RepairRule};

    fn rule(name: &str, pattern: &str, replace_with: &str) -> RepairRule {
        RepairRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replace_with: replace_with.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn compiles_default_rules() {
        let config = RepairConfig::load_default_rules().unwrap();
        let compiled = compile_rules(&config).unwrap();
        assert_eq!(compiled.rules.len(), config.rules.len());
        assert_eq!(compiled.markers.len(), 3);
        // Application order must match config order.
        assert_eq!(compiled.rules[0].name, "right_single_quote");
        assert_eq!(compiled.rules.last().unwrap().name, "non_breaking_space");
    }

    #[test]
    fn rejects_non_ascii_replacement() {
        let config = RepairConfig {
            rules: vec![rule("bad", "\u{c2}", "\u{2019}")],
            markers: vec!["\u{c2}".to_string()],
        };
        let err = compile_rules(&config).unwrap_err();
        assert!(err.to_string().contains("not ASCII-safe"));
    }

    #[test]
    fn rejects_pattern_without_marker() {
        let config = RepairConfig {
            rules: vec![rule("unmarked", "abc", "x")],
            markers: vec!["\u{c2}".to_string()],
        };
        let err = compile_rules(&config).unwrap_err();
        assert!(err.to_string().contains("marker"));
    }

    #[test]
    fn rejects_replacement_cycle() {
        let config = RepairConfig {
            rules: vec![
                rule("one", "@@x", "ok"),
                rule("two", "@@", "see @@x"),
            ],
            markers: vec!["@@".to_string()],
        };
        let err = compile_rules(&config).unwrap_err();
        assert!(err.to_string().contains("reintroduces"));
    }

    #[test]
    fn skips_disabled_rules() {
        let mut config = RepairConfig::load_default_rules().unwrap();
        config.rules[0].enabled = Some(false);
        let compiled = compile_rules(&config).unwrap();
        assert_eq!(compiled.rules.len(), config.rules.len() - 1);
        assert!(compiled.rules.iter().all(|r| r.name != "right_single_quote"));
    }
}
