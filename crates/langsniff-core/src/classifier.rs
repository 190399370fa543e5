//! The classifier: hint override, ordered detectors, `text` fallback.

use std::sync::OnceLock;

use serde::Serialize;

use crate::config::ClassifierConfig;
use crate::detectors::{DetectorChain, RuleSet};
use crate::language::LanguageTag;

/// What decided a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detector", rename_all = "lowercase")]
pub enum DetectionSource {
    /// The caller supplied a declared language.
    Hint,
    /// A detector in the chain matched; carries the detector name.
    Rule(String),
    /// Nothing matched, or the sample was empty.
    Fallback,
}

/// A classification together with the reason for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub language: LanguageTag,
    pub source: DetectionSource,
}

/// Heuristic language classifier.
///
/// Holds an immutable [`DetectorChain`]; classification is a pure function
/// of the sample and hint, so one instance can be shared across threads.
///
/// # Examples
///
/// ```
/// use langsniff_core::{Classifier, LanguageTag};
///
/// let classifier = Classifier::new();
/// assert_eq!(
///     classifier.classify(Some("FROM ubuntu:22.04\nRUN apt-get update"), None),
///     LanguageTag::Dockerfile
/// );
/// assert_eq!(
///     classifier.classify(Some("FROM ubuntu:22.04"), Some(LanguageTag::Yaml)),
///     LanguageTag::Yaml
/// );
/// assert_eq!(classifier.classify(None, None), LanguageTag::Text);
/// ```
#[derive(Debug)]
pub struct Classifier {
    chain: DetectorChain,
}

impl Classifier {
    /// Classifier running every built-in detector.
    pub fn new() -> Self {
        Self::with_chain(DetectorChain::with_builtin(RuleSet::Extended))
    }

    /// Classifier built from `config`: its rule set minus any disabled
    /// detectors.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let chain = config
            .disabled_detectors()
            .iter()
            .fold(DetectorChain::with_builtin(config.rule_set()), |chain, name| {
                chain.without(name)
            });
        Self::with_chain(chain)
    }

    /// Classifier over a caller-assembled chain.
    pub fn with_chain(chain: DetectorChain) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &DetectorChain {
        &self.chain
    }

    /// Classify `sample`. Never fails.
    ///
    /// A `hint` is returned unchanged without looking at the sample. A
    /// missing or empty sample is `text`.
    pub fn classify(&self, sample: Option<&str>, hint: Option<LanguageTag>) -> LanguageTag {
        self.explain(sample, hint).language
    }

    /// Like [`classify`](Self::classify), but also reports which step
    /// produced the tag.
    pub fn explain(&self, sample: Option<&str>, hint: Option<LanguageTag>) -> Detection {
        if let Some(language) = hint {
            tracing::trace!(language = %language, "using declared language");
            return Detection {
                language,
                source: DetectionSource::Hint,
            };
        }

        let sample = match sample {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Detection {
                    language: LanguageTag::Text,
                    source: DetectionSource::Fallback,
                };
            }
        };

        match self.chain.find(sample) {
            Some((detector, language)) => {
                tracing::debug!(
                    detector = detector.name(),
                    language = %language,
                    bytes = sample.len(),
                    "classified sample"
                );
                Detection {
                    language,
                    source: DetectionSource::Rule(detector.name().to_string()),
                }
            }
            None => {
                tracing::debug!(bytes = sample.len(), "no detector matched, using text");
                Detection {
                    language: LanguageTag::Text,
                    source: DetectionSource::Fallback,
                }
            }
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// Classify with the default (extended) detector set.
///
/// ```
/// use langsniff_core::{LanguageTag, classify};
///
/// assert_eq!(classify(Some("[server]\nport = 8080"), None), LanguageTag::Toml);
/// assert_eq!(classify(Some(""), None), LanguageTag::Text);
/// ```
pub fn classify(sample: Option<&str>, hint: Option<LanguageTag>) -> LanguageTag {
    DEFAULT_CLASSIFIER
        .get_or_init(Classifier::new)
        .classify(sample, hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(sample: &str) -> LanguageTag {
        Classifier::new().classify(Some(sample), None)
    }

    // ===== Priority ordering =====

    #[test]
    fn apache_tag_beats_nginx_location() {
        let sample = "<VirtualHost *:80>\n    ServerAdmin admin@example.com\n</VirtualHost>\nlocation /x {\n    root /srv;\n}";
        assert_eq!(tag(sample), LanguageTag::Apache);
    }

    #[test]
    fn nginx_without_apache_tag() {
        let sample = "server {\n    listen 80;\n    location /x {\n        proxy_pass http://app;\n    }\n}";
        assert_eq!(tag(sample), LanguageTag::Nginx);
    }

    #[test]
    fn nginx_with_brace_on_next_line() {
        assert_eq!(tag("server\n{\n    listen 80;\n}"), LanguageTag::Nginx);
    }

    #[test]
    fn dockerfile_instruction_wrapped_onto_next_line() {
        assert_eq!(tag("RUN\n  apt-get update"), LanguageTag::Dockerfile);
    }

    #[test]
    fn semicolon_free_javascript_is_not_kdl() {
        assert_eq!(
            tag("function greet(name) {\n  return \"hi \" + name\n}"),
            LanguageTag::Javascript
        );
    }

    #[test]
    fn python_set_literal_is_not_nix() {
        assert_eq!(
            tag("import os\nfor k in {a, b}:\n    print(k)"),
            LanguageTag::Python
        );
        assert_ne!(tag("if mode in {READ, WRITE}:\n    run()"), LanguageTag::Nix);
    }

    #[test]
    fn dockerfile_first() {
        assert_eq!(
            tag("FROM ubuntu:22.04\nRUN apt-get update"),
            LanguageTag::Dockerfile
        );
    }

    #[test]
    fn json_valid_and_malformed() {
        assert_eq!(tag("{\"a\": 1, \"b\": [1,2,3]}"), LanguageTag::Json);
        assert_eq!(tag("{\"a\": 1,"), LanguageTag::Json);
        assert_eq!(tag("  [\"x\", \"y\"]"), LanguageTag::Json);
    }

    #[test]
    fn systemd_before_dotenv_and_toml() {
        assert_eq!(tag("[Service]\nExecStart=/bin/true"), LanguageTag::Systemd);
    }

    #[test]
    fn dotenv_without_header() {
        assert_eq!(tag("DB_HOST=localhost\nPUID=1000"), LanguageTag::Dotenv);
    }

    #[test]
    fn toml_with_table_header() {
        assert_eq!(
            tag("[server]\nhost = \"0.0.0.0\"\nport = 8080"),
            LanguageTag::Toml
        );
    }

    #[test]
    fn yaml_mapping_and_list() {
        assert_eq!(
            tag("services:\n  web:\n    image: nginx\n    ports:\n      - \"80:80\""),
            LanguageTag::Yaml
        );
    }

    #[test]
    fn css_is_not_yaml() {
        let detection = Classifier::new().explain(Some(".btn { color: red; }"), None);
        assert_eq!(detection.language, LanguageTag::Text);
        assert_eq!(detection.source, DetectionSource::Fallback);
    }

    #[test]
    fn javascript_keywords() {
        assert_eq!(
            tag("const add = (a, b) => a + b;\nconsole.log(add(1, 2));"),
            LanguageTag::Javascript
        );
    }

    #[test]
    fn python_idioms() {
        assert_eq!(
            tag("def main():\n    print('hi')\nif __name__ == '__main__':\n    main()"),
            LanguageTag::Python
        );
    }

    #[test]
    fn sql_statement() {
        assert_eq!(
            tag("SELECT id, name FROM users WHERE active = 1"),
            LanguageTag::Sql
        );
    }

    #[test]
    fn nix_module_header() {
        assert_eq!(
            tag("{ config, lib, pkgs, ... }:\n{\n  environment.systemPackages = [ pkgs.git ];\n}"),
            LanguageTag::Nix
        );
    }

    // ===== Fallback & hints =====

    #[test]
    fn empty_and_missing_samples_fall_back() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify(Some(""), None), LanguageTag::Text);
        assert_eq!(classifier.classify(None, None), LanguageTag::Text);
        assert_eq!(
            classifier.explain(None, None).source,
            DetectionSource::Fallback
        );
    }

    #[test]
    fn hint_wins_over_content() {
        let classifier = Classifier::new();
        let detection = classifier.explain(Some("FROM alpine"), Some(LanguageTag::Python));
        assert_eq!(detection.language, LanguageTag::Python);
        assert_eq!(detection.source, DetectionSource::Hint);
        assert_eq!(
            classifier.classify(None, Some(LanguageTag::Json)),
            LanguageTag::Json
        );
    }

    #[test]
    fn explain_names_matching_rule() {
        let detection = Classifier::new().explain(Some("[Unit]\nDescription=x"), None);
        assert_eq!(detection.source, DetectionSource::Rule("systemd".to_string()));
    }

    // ===== Rule sets & config =====

    #[test]
    fn core_rule_set_skips_later_detectors() {
        let config = ClassifierConfig::builder()
            .rule_set(RuleSet::Core)
            .build()
            .unwrap();
        let classifier = Classifier::from_config(&config);
        assert_eq!(classifier.chain().len(), 10);
        assert_eq!(
            classifier.classify(Some("DROP TABLE users"), None),
            LanguageTag::Text
        );
        assert_eq!(tag("DROP TABLE users"), LanguageTag::Sql);
    }

    #[test]
    fn disabled_detector_is_skipped() {
        let config = ClassifierConfig::builder()
            .disable_detector("dockerfile")
            .build()
            .unwrap();
        let classifier = Classifier::from_config(&config);
        assert_eq!(
            classifier.classify(Some("FROM ubuntu:22.04\nRUN apt-get update"), None),
            LanguageTag::Text
        );
    }

    #[test]
    fn free_function_matches_default_classifier() {
        let sample = "name: demo\nversion: 1";
        assert_eq!(classify(Some(sample), None), tag(sample));
    }

    #[test]
    fn detection_serializes_source() {
        let detection = Detection {
            language: LanguageTag::Toml,
            source: DetectionSource::Rule("toml".to_string()),
        };
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["language"], "toml");
        assert_eq!(json["source"]["kind"], "rule");
        assert_eq!(json["source"]["detector"], "toml");
    }

    // ===== Properties =====

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_tag() -> impl Strategy<Value = LanguageTag> {
            proptest::sample::select(LanguageTag::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn classification_is_deterministic(sample in "\\PC{0,200}") {
                let classifier = Classifier::new();
                prop_assert_eq!(
                    classifier.classify(Some(&sample), None),
                    classifier.classify(Some(&sample), None)
                );
            }

            #[test]
            fn classification_is_total(sample in any::<String>()) {
                let tag = classify(Some(&sample), None);
                prop_assert!(LanguageTag::ALL.contains(&tag));
            }

            #[test]
            fn hint_always_wins(sample in "\\PC{0,200}", hint in any_tag()) {
                prop_assert_eq!(classify(Some(&sample), Some(hint)), hint);
            }

            #[test]
            fn dockerfile_line_always_wins(rest in "[a-z ]{0,40}") {
                let sample = format!("FROM alpine\n{}", rest);
                prop_assert_eq!(classify(Some(&sample), None), LanguageTag::Dockerfile);
            }
        }
    }
}
