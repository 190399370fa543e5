//! The built-in rule table.
//!
//! Rules run most-specific first. Several predicates are mutually
//! satisfiable (an nginx `location` block inside an Apache config, a TOML
//! `key = value` line that also reads as dotenv), so position in
//! [`BUILTIN_RULES`] is part of the classifier's contract.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::detector::LanguageDetector;
use super::patterns;
use crate::language::LanguageTag;

/// Which built-in detectors a classifier runs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[schemars(description = "Built-in detector set (core or extended)")]
pub enum RuleSet {
    /// The ten detectors of the first release: dockerfile, apache, nginx,
    /// json, systemd, dotenv, toml, yaml, javascript, python.
    Core,
    /// Core plus kdl, sql, and nix at their fixed positions.
    #[default]
    Extended,
}

impl RuleSet {
    /// Name used in config files and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSet::Core => "core",
            RuleSet::Extended => "extended",
        }
    }

    /// Returns `true` if `rule` belongs to this set.
    #[must_use]
    pub fn includes(self, rule: &DetectionRule) -> bool {
        match self {
            RuleSet::Core => rule.rule_set == RuleSet::Core,
            RuleSet::Extended => true,
        }
    }
}

/// A (language, predicate) pair evaluated by the classifier.
#[derive(Clone, Copy)]
pub struct DetectionRule {
    language: LanguageTag,
    rule_set: RuleSet,
    predicate: fn(&str) -> bool,
}

impl DetectionRule {
    const fn new(language: LanguageTag, rule_set: RuleSet, predicate: fn(&str) -> bool) -> Self {
        Self {
            language,
            rule_set,
            predicate,
        }
    }

    /// Language this rule reports on a match.
    pub fn language(&self) -> LanguageTag {
        self.language
    }

    /// Smallest rule set this rule ships in.
    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Run the predicate without wrapping the result in a tag.
    pub fn matches(&self, sample: &str) -> bool {
        (self.predicate)(sample)
    }
}

impl std::fmt::Debug for DetectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionRule")
            .field("language", &self.language)
            .field("rule_set", &self.rule_set)
            .finish_non_exhaustive()
    }
}

impl LanguageDetector for DetectionRule {
    fn detect(&self, sample: &str) -> Option<LanguageTag> {
        self.matches(sample).then_some(self.language)
    }

    fn name(&self) -> &str {
        self.language.as_str()
    }
}

/// Built-in rules in priority order.
pub static BUILTIN_RULES: [DetectionRule; 13] = [
    DetectionRule::new(LanguageTag::Dockerfile, RuleSet::Core, patterns::is_dockerfile),
    DetectionRule::new(LanguageTag::Kdl, RuleSet::Extended, patterns::is_kdl),
    DetectionRule::new(LanguageTag::Apache, RuleSet::Core, patterns::is_apache),
    DetectionRule::new(LanguageTag::Nginx, RuleSet::Core, patterns::is_nginx),
    DetectionRule::new(LanguageTag::Json, RuleSet::Core, patterns::is_json),
    DetectionRule::new(LanguageTag::Systemd, RuleSet::Core, patterns::is_systemd),
    DetectionRule::new(LanguageTag::Dotenv, RuleSet::Core, patterns::is_dotenv),
    DetectionRule::new(LanguageTag::Toml, RuleSet::Core, patterns::is_toml),
    DetectionRule::new(LanguageTag::Sql, RuleSet::Extended, patterns::is_sql),
    DetectionRule::new(LanguageTag::Nix, RuleSet::Extended, patterns::is_nix),
    DetectionRule::new(LanguageTag::Yaml, RuleSet::Core, patterns::is_yaml),
    DetectionRule::new(LanguageTag::Javascript, RuleSet::Core, patterns::is_javascript),
    DetectionRule::new(LanguageTag::Python, RuleSet::Core, patterns::is_python),
];

/// Built-in rules belonging to `rule_set`, in priority order.
pub fn builtin_rules(rule_set: RuleSet) -> impl Iterator<Item = &'static DetectionRule> {
    BUILTIN_RULES.iter().filter(move |rule| rule_set.includes(rule))
}

/// Names of every built-in detector, usable in `disabled_detectors`.
pub fn builtin_detector_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_RULES.iter().map(|rule| rule.language.as_str())
}
