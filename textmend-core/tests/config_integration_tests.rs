// textmend-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use textmend_core::config::{self, RepairConfig, RepairRule};
use textmend_core::rules::compiler::compile_rules;

#[test]
fn test_load_default_rules() {
    let config = RepairConfig::load_default_rules().unwrap();
    assert_eq!(config.rules.len(), 9);
    assert_eq!(config.markers.len(), 3);
    assert!(config.rules.iter().any(|r| r.name == "right_single_quote"));
    assert!(config.rules.iter().any(|r| r.name == "non_breaking_space"));

    // The embedded file spells patterns as \u escapes; make sure they decode
    // to the real corrupted sequences.
    let quote = config
        .rules
        .iter()
        .find(|r| r.name == "right_single_quote")
        .unwrap();
    assert_eq!(quote.pattern, "\u{e2}\u{20ac}\u{2122}");
    assert_eq!(quote.replace_with, "'");

    let nbsp = config
        .rules
        .iter()
        .find(|r| r.name == "non_breaking_space")
        .unwrap();
    assert_eq!(nbsp.pattern, "\u{a0}");
    assert_eq!(nbsp.replace_with, " ");
}

#[test]
fn test_default_rule_order_is_fixed() {
    let config = RepairConfig::load_default_rules().unwrap();
    let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "right_single_quote",
            "left_single_quote",
            "left_double_quote",
            "right_double_quote",
            "en_dash",
            "em_dash",
            "bullet",
            "stray_artifact",
            "non_breaking_space",
        ]
    );
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
markers:
  - "zz"
rules:
  - name: test_rule
    pattern: "zzq"
    replace_with: "[TEST]"
    description: "A test rule"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = RepairConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "test_rule");
    assert_eq!(config.rules[0].pattern, "zzq");
    assert_eq!(config.rules[0].replace_with, "[TEST]");
    assert_eq!(config.markers, vec!["zz".to_string()]);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_duplicate_names() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: dup
    pattern: "a"
    replace_with: "x"
  - name: dup
    pattern: "b"
    replace_with: "y"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = RepairConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Duplicate rule name"));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_empty_pattern() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: hollow
    pattern: ""
    replace_with: "x"
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let err = RepairConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("empty `pattern`"));
    Ok(())
}

#[test]
fn test_merge_rules_no_user_config() {
    let default_config = RepairConfig::load_default_rules().unwrap();
    let merged = config::merge_rules(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test]
fn test_merge_rules_override_keeps_position() {
    let default_config = RepairConfig::load_default_rules().unwrap();
    let user_config = RepairConfig {
        rules: vec![RepairRule {
            name: "bullet".to_string(),
            pattern: "\u{e2}\u{20ac}\u{a2}".to_string(),
            replace_with: "*".to_string(),
            ..Default::default()
        }],
        markers: Vec::new(),
    };

    let merged = config::merge_rules(default_config.clone(), Some(user_config));
    assert_eq!(merged.rules.len(), default_config.rules.len());

    // Overridden rule stays at its original position in the application order.
    let bullet_index = merged.rules.iter().position(|r| r.name == "bullet").unwrap();
    assert_eq!(bullet_index, 6);
    assert_eq!(merged.rules[bullet_index].replace_with, "*");

    // Empty user marker list keeps the defaults.
    assert_eq!(merged.markers, default_config.markers);
}

#[test]
fn test_merge_rules_appends_new_rules() {
    let default_config = RepairConfig::load_default_rules().unwrap();
    let user_config = RepairConfig {
        rules: vec![RepairRule {
            name: "broken_ellipsis".to_string(),
            pattern: "\u{e2}\u{20ac}\u{a6}".to_string(),
            replace_with: "...".to_string(),
            ..Default::default()
        }],
        markers: Vec::new(),
    };

    let merged = config::merge_rules(default_config.clone(), Some(user_config));
    assert_eq!(merged.rules.len(), default_config.rules.len() + 1);
    assert_eq!(merged.rules.last().unwrap().name, "broken_ellipsis");

    // The merged set still compiles: the new pattern carries a marker prefix.
    compile_rules(&merged).unwrap();
}

#[test]
fn test_disabled_default_rule_via_merge() {
    let default_config = RepairConfig::load_default_rules().unwrap();
    let mut disabled = default_config
        .rules
        .iter()
        .find(|r| r.name == "stray_artifact")
        .unwrap()
        .clone();
    disabled.enabled = Some(false);

    let user_config = RepairConfig {
        rules: vec![disabled],
        markers: Vec::new(),
    };

    let merged = config::merge_rules(default_config, Some(user_config));
    let compiled = compile_rules(&merged).unwrap();
    assert!(compiled.rules.iter().all(|r| r.name != "stray_artifact"));
}
