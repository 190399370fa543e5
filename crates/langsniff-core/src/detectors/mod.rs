//! Language detectors for classifier dispatch.
//!
//! This module provides:
//!
//! - [`DetectionRule`] -- a (language, predicate) pair
//! - [`BUILTIN_RULES`] -- the built-in rules in priority order
//! - [`LanguageDetector`] -- trait for custom detection strategies
//! - [`DetectorChain`] -- chain-of-responsibility dispatcher
//!
//! ## Extending detection
//!
//! Implement [`LanguageDetector`] and register it via
//! [`DetectorChain::with_builtin(..).prepend(your_detector)`](DetectorChain::prepend)
//! to override detection for specific samples without modifying
//! langsniff-core.

mod detector;
pub mod patterns;
mod rules;

pub use detector::{DetectorChain, LanguageDetector};
pub use rules::{BUILTIN_RULES, DetectionRule, RuleSet, builtin_detector_names, builtin_rules};
