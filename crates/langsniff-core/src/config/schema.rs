use super::*;
use crate::detectors::builtin_detector_names;

impl ClassifierConfig {
    /// Validate the configuration and return any warnings.
    ///
    /// This performs semantic validation beyond what TOML parsing can check:
    /// - `disabled_detectors` entries name built-in detectors
    /// - `disabled_detectors` entries apply to the selected `rule_set`
    /// - `hint_aliases` values name known languages
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let known: Vec<&str> = builtin_detector_names().collect();
        let active: Vec<&str> = crate::detectors::builtin_rules(self.rule_set)
            .map(|rule| rule.language().as_str())
            .collect();

        for name in &self.disabled_detectors {
            if !known.iter().any(|k| k.eq_ignore_ascii_case(name)) {
                warnings.push(ConfigWarning {
                    field: "disabled_detectors".to_string(),
                    message: format!("unknown detector '{}'", name),
                    suggestion: Some(format!("known detectors: {}", known.join(", "))),
                });
            } else if !active.iter().any(|a| a.eq_ignore_ascii_case(name)) {
                warnings.push(ConfigWarning {
                    field: "disabled_detectors".to_string(),
                    message: format!(
                        "detector '{}' is not part of the '{}' rule set",
                        name,
                        self.rule_set.as_str()
                    ),
                    suggestion: Some("remove it or set rule_set = \"extended\"".to_string()),
                });
            }
        }

        for (alias, target) in &self.hint_aliases {
            if target.parse::<LanguageTag>().is_err() {
                warnings.push(ConfigWarning {
                    field: format!("hint_aliases.{}", alias),
                    message: format!("alias '{}' points to unknown language '{}'", alias, target),
                    suggestion: Some(format!(
                        "use one of: {}",
                        LanguageTag::grammar_ids().collect::<Vec<_>>().join(", ")
                    )),
                });
            }
        }

        warnings
    }
}
