//! # langsniff-core
//!
//! Heuristic language classifier for code samples that carry no declared
//! language.
//!
//! Recognises:
//! - Dockerfiles, Apache and nginx configs, systemd units
//! - JSON, TOML, YAML and dotenv files
//! - KDL, SQL and Nix (extended rule set)
//! - JavaScript and Python snippets
//!
//! Anything else is `text`. A declared hint always wins over the heuristics.

pub mod config;
pub mod detectors;
pub mod error;
pub mod language;
pub mod render;

mod classifier;

pub use classifier::{Classifier, Detection, DetectionSource, classify};
pub use config::{ClassifierConfig, ConfigWarning};
pub use detectors::{BUILTIN_RULES, DetectionRule, DetectorChain, LanguageDetector, RuleSet};
pub use error::{ConfigError, HighlightError, ParseLanguageError};
pub use language::{LanguageTag, declared_language};
pub use render::{Highlighter, RenderedBlock, render_block};
