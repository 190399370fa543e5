//! Classifier configuration

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::detectors::RuleSet;
use crate::error::ConfigError;
use crate::language::{LanguageTag, declared_language};

mod builder;
mod schema;

#[cfg(test)]
mod tests;

pub use builder::ClassifierConfigBuilder;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = ".langsniff.toml";

/// Configuration for the classifier.
///
/// Only the detector battery and hint resolution are configurable; rule
/// order is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Which built-in detectors to run
    #[schemars(description = "Built-in detector set: \"extended\" (default) or \"core\"")]
    rule_set: RuleSet,

    /// Detectors to skip, by name
    #[schemars(
        description = "Built-in detectors to skip, by language name (e.g., [\"sql\", \"nix\"])"
    )]
    disabled_detectors: Vec<String>,

    /// Extra class-name -> language mappings for markup hints
    #[schemars(
        description = "Extra language-xxx class names mapped to a language (e.g., { sh = \"text\" })"
    )]
    hint_aliases: BTreeMap<String, String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rule_set: RuleSet::Extended,
            disabled_detectors: Vec::new(),
            hint_aliases: BTreeMap::new(),
        }
    }
}

impl ClassifierConfig {
    /// Create a new [`ClassifierConfigBuilder`].
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::new()
    }

    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config or use default, returning any load warning
    ///
    /// If a config path is provided but the file cannot be loaded or parsed,
    /// returns the default config with a warning message describing the
    /// error, so a typo never silently changes classification.
    pub fn load_or_default(path: Option<&PathBuf>) -> (Self, Option<String>) {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => (config, None),
                Err(e) => {
                    let detail = std::error::Error::source(&e)
                        .map(|s| format!(": {}", s))
                        .unwrap_or_default();
                    (
                        Self::default(),
                        Some(format!("{}{}; using defaults", e, detail)),
                    )
                }
            },
            None => (Self::default(), None),
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn disabled_detectors(&self) -> &[String] {
        &self.disabled_detectors
    }

    pub fn hint_aliases(&self) -> &BTreeMap<String, String> {
        &self.hint_aliases
    }

    /// Set the built-in rule set.
    pub fn set_rule_set(&mut self, rule_set: RuleSet) {
        self.rule_set = rule_set;
    }

    /// Check if a detector runs under this config.
    pub fn is_detector_enabled(&self, name: &str) -> bool {
        !self
            .disabled_detectors
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }

    /// Resolve a markup `class` attribute to a declared language, honouring
    /// `hint_aliases`.
    pub fn resolve_hint(&self, class_attr: &str) -> Option<LanguageTag> {
        declared_language(class_attr, &self.hint_aliases)
    }
}

/// A non-fatal configuration issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    /// The field path that has the issue (e.g., "disabled_detectors")
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

/// Generate a JSON Schema for the ClassifierConfig type.
///
/// This can be used to provide editor autocompletion and validation
/// for `.langsniff.toml` files.
///
/// # Example
///
/// ```rust
/// use langsniff_core::config::generate_schema;
///
/// let schema = generate_schema();
/// let json = serde_json::to_string_pretty(&schema).unwrap();
/// assert!(json.contains("rule_set"));
/// ```
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(ClassifierConfig)
}
