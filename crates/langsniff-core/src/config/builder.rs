use super::*;

/// Builder for constructing a [`ClassifierConfig`] with validation.
///
/// Setters return `&mut Self` for chaining, with a terminal `build()` that
/// validates and returns `Result<ClassifierConfig, ConfigError>`.
///
/// **Note:** `build()` and `build_unchecked()` drain the builder's state.
/// A second call will produce a default config.
///
/// # Examples
///
/// ```rust
/// use langsniff_core::{ClassifierConfig, RuleSet};
///
/// let config = ClassifierConfig::builder()
///     .rule_set(RuleSet::Core)
///     .disable_detector("python")
///     .build()
///     .expect("valid config");
/// assert_eq!(config.rule_set(), RuleSet::Core);
/// assert!(!config.is_detector_enabled("python"));
/// ```
pub struct ClassifierConfigBuilder {
    rule_set: Option<RuleSet>,
    disabled_detectors: Vec<String>,
    hint_aliases: BTreeMap<String, String>,
}

impl ClassifierConfigBuilder {
    /// Create a new builder with all fields unset.
    ///
    /// Prefer [`ClassifierConfig::builder()`] over calling this directly.
    pub(super) fn new() -> Self {
        Self {
            rule_set: None,
            disabled_detectors: Vec::new(),
            hint_aliases: BTreeMap::new(),
        }
    }

    /// Set the built-in rule set.
    pub fn rule_set(&mut self, rule_set: RuleSet) -> &mut Self {
        self.rule_set = Some(rule_set);
        self
    }

    /// Add a detector name to the disabled list. Duplicates are dropped.
    pub fn disable_detector(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self
            .disabled_detectors
            .iter()
            .any(|d| d.eq_ignore_ascii_case(&name))
        {
            self.disabled_detectors.push(name);
        }
        self
    }

    /// Map a class name to a language for markup hints.
    pub fn hint_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.hint_aliases.insert(alias.into(), target.into());
        self
    }

    /// Build the `ClassifierConfig`, applying defaults for unset fields and
    /// running validation.
    ///
    /// Returns `Err(ConfigError::ValidationFailed)` if validation produces
    /// any warning.
    pub fn build(&mut self) -> Result<ClassifierConfig, ConfigError> {
        let config = self.build_unchecked();
        let warnings = config.validate();
        if !warnings.is_empty() {
            return Err(ConfigError::ValidationFailed(warnings));
        }
        Ok(config)
    }

    /// Build the `ClassifierConfig` without running any validation.
    pub fn build_unchecked(&mut self) -> ClassifierConfig {
        ClassifierConfig {
            rule_set: self.rule_set.take().unwrap_or_default(),
            disabled_detectors: std::mem::take(&mut self.disabled_detectors),
            hint_aliases: std::mem::take(&mut self.hint_aliases),
        }
    }
}

impl Default for ClassifierConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
