use super::*;
use std::io::Write;

#[test]
fn test_default_config_runs_every_detector() {
    let config = ClassifierConfig::default();

    assert_eq!(config.rule_set(), RuleSet::Extended);
    assert!(config.disabled_detectors().is_empty());
    assert!(config.hint_aliases().is_empty());
    for name in crate::detectors::builtin_detector_names() {
        assert!(config.is_detector_enabled(name), "{} disabled", name);
    }
}

#[test]
fn test_default_config_has_no_warnings() {
    assert!(ClassifierConfig::default().validate().is_empty());
}

#[test]
fn test_parse_full_toml() {
    let toml_str = r#"
rule_set = "core"
disabled_detectors = ["python", "YAML"]

[hint_aliases]
sh = "text"
jsx = "javascript"
"#;
    let config: ClassifierConfig = toml::from_str(toml_str).unwrap();

    assert_eq!(config.rule_set(), RuleSet::Core);
    assert!(!config.is_detector_enabled("python"));
    assert!(!config.is_detector_enabled("yaml"));
    assert!(config.is_detector_enabled("toml"));
    assert_eq!(config.hint_aliases().get("sh").map(String::as_str), Some("text"));
    assert!(config.validate().is_empty());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: ClassifierConfig = toml::from_str("disabled_detectors = [\"sql\"]").unwrap();
    assert_eq!(config.rule_set(), RuleSet::Extended);
    assert!(!config.is_detector_enabled("sql"));
}

#[test]
fn test_empty_toml_is_default() {
    let config: ClassifierConfig = toml::from_str("").unwrap();
    assert_eq!(config, ClassifierConfig::default());
}

#[test]
fn test_invalid_rule_set_is_parse_error() {
    let result: Result<ClassifierConfig, _> = toml::from_str("rule_set = \"everything\"");
    assert!(result.is_err());
}

#[test]
fn test_unknown_detector_warns() {
    let config: ClassifierConfig =
        toml::from_str("disabled_detectors = [\"bash\"]").unwrap();
    let warnings = config.validate();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "disabled_detectors");
    assert!(warnings[0].message.contains("bash"));
    assert!(warnings[0].suggestion.as_deref().unwrap().contains("dockerfile"));
}

#[test]
fn test_extended_detector_under_core_set_warns() {
    let config: ClassifierConfig =
        toml::from_str("rule_set = \"core\"\ndisabled_detectors = [\"kdl\"]").unwrap();
    let warnings = config.validate();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("'core'"));
}

#[test]
fn test_alias_to_unknown_language_warns() {
    let config: ClassifierConfig = toml::from_str("[hint_aliases]\nsh = \"bash\"").unwrap();
    let warnings = config.validate();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "hint_aliases.sh");
}

#[test]
fn test_resolve_hint_uses_aliases() {
    let config: ClassifierConfig = toml::from_str("[hint_aliases]\nconf = \"nginx\"").unwrap();
    assert_eq!(config.resolve_hint("language-conf"), Some(LanguageTag::Nginx));
    assert_eq!(config.resolve_hint("language-toml"), Some(LanguageTag::Toml));
    assert_eq!(config.resolve_hint("plain"), None);
}

// ===== Loading =====

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"rule_set = \"core\"\n").unwrap();
    file.flush().unwrap();

    let config = ClassifierConfig::load(file.path()).unwrap();
    assert_eq!(config.rule_set(), RuleSet::Core);
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClassifierConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"rule_set = [").unwrap();
    file.flush().unwrap();

    let err = ClassifierConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_load_or_default_without_path() {
    let (config, warning) = ClassifierConfig::load_or_default(None);
    assert_eq!(config, ClassifierConfig::default());
    assert!(warning.is_none());
}

#[test]
fn test_load_or_default_warns_on_bad_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"rule_set = 42").unwrap();
    file.flush().unwrap();

    let path = file.path().to_path_buf();
    let (config, warning) = ClassifierConfig::load_or_default(Some(&path));
    assert_eq!(config, ClassifierConfig::default());
    let warning = warning.unwrap();
    assert!(warning.contains("Failed to parse config file"), "{}", warning);
    assert!(warning.contains("using defaults"));
}

// ===== Builder =====

#[test]
fn test_builder_defaults() {
    let config = ClassifierConfig::builder().build().unwrap();
    assert_eq!(config, ClassifierConfig::default());
}

#[test]
fn test_builder_dedups_disabled_detectors() {
    let config = ClassifierConfig::builder()
        .disable_detector("sql")
        .disable_detector("SQL")
        .disable_detector("nix")
        .build()
        .unwrap();
    assert_eq!(config.disabled_detectors(), ["sql", "nix"]);
}

#[test]
fn test_builder_rejects_unknown_detector() {
    let result = ClassifierConfig::builder().disable_detector("bash").build();
    match result {
        Err(ConfigError::ValidationFailed(warnings)) => assert_eq!(warnings.len(), 1),
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
}

#[test]
fn test_builder_unchecked_keeps_invalid_data() {
    let config = ClassifierConfig::builder()
        .hint_alias("sh", "bash")
        .build_unchecked();
    assert_eq!(config.validate().len(), 1);
}

#[test]
fn test_builder_drains_state() {
    let mut builder = ClassifierConfig::builder();
    builder.rule_set(RuleSet::Core).disable_detector("python");
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_eq!(first.rule_set(), RuleSet::Core);
    assert_eq!(second, ClassifierConfig::default());
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = ClassifierConfig::builder()
        .rule_set(RuleSet::Core)
        .disable_detector("json")
        .hint_alias("jsonc", "json")
        .build()
        .unwrap();
    let serialized = toml::to_string(&config).unwrap();
    let parsed: ClassifierConfig = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_generate_schema_lists_fields() {
    let schema = generate_schema();
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("rule_set"));
    assert!(json.contains("disabled_detectors"));
    assert!(json.contains("hint_aliases"));
}
