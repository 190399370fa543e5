//! Extensible language detection via the chain-of-responsibility pattern.
//!
//! Callers can implement [`LanguageDetector`] and register it in a
//! [`DetectorChain`] to override or extend the built-in rules without
//! touching langsniff-core.

use super::rules::{RuleSet, builtin_rules};
use crate::language::LanguageTag;

/// A single language detection strategy.
///
/// Implementors inspect a sample and return `Some(LanguageTag)` when they
/// recognise it, or `None` to defer to the next detector in the chain.
///
/// # Object Safety
///
/// This trait is object-safe so that detectors can be stored as
/// `Box<dyn LanguageDetector>` in a [`DetectorChain`].
pub trait LanguageDetector: Send + Sync {
    /// Attempt to classify `sample`. Return `None` to defer.
    fn detect(&self, sample: &str) -> Option<LanguageTag>;

    /// Human-readable name for this detector (used in logs, `explain`
    /// output, and `disabled_detectors` filtering).
    ///
    /// Defaults to the short (unqualified) type name.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Ordered chain of [`LanguageDetector`] implementations.
///
/// Detectors are consulted in order. The first `Some(LanguageTag)` wins.
///
/// # Examples
///
/// ```
/// use langsniff_core::{DetectorChain, LanguageDetector, LanguageTag, RuleSet};
///
/// struct Makefile;
/// impl LanguageDetector for Makefile {
///     fn detect(&self, sample: &str) -> Option<LanguageTag> {
///         sample.contains(".PHONY").then_some(LanguageTag::Text)
///     }
/// }
///
/// let chain = DetectorChain::with_builtin(RuleSet::Extended).prepend(Makefile);
///
/// assert_eq!(chain.detect(".PHONY: all\nRUN = go"), Some(LanguageTag::Text));
/// assert_eq!(chain.detect("FROM alpine"), Some(LanguageTag::Dockerfile));
/// ```
pub struct DetectorChain {
    detectors: Vec<Box<dyn LanguageDetector>>,
}

impl DetectorChain {
    /// Create an empty chain with no detectors.
    ///
    /// An empty chain always returns `None` from [`detect`](Self::detect).
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Create a chain pre-populated with the built-in rules of `rule_set`,
    /// in priority order.
    pub fn with_builtin(rule_set: RuleSet) -> Self {
        let detectors = builtin_rules(rule_set)
            .map(|rule| Box::new(*rule) as Box<dyn LanguageDetector>)
            .collect();
        Self { detectors }
    }

    /// Add a detector to the **front** of the chain (highest priority).
    pub fn prepend(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detectors.insert(0, Box::new(detector));
        self
    }

    /// Add a detector to the **end** of the chain (lowest priority).
    pub fn push(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    /// Drop every detector named `name` (ASCII case-insensitive). The
    /// relative order of the rest is unchanged.
    pub fn without(mut self, name: &str) -> Self {
        self.detectors
            .retain(|detector| !detector.name().eq_ignore_ascii_case(name));
        self
    }

    /// Run the chain: consult each detector in order and return the first
    /// `Some(LanguageTag)`.
    pub fn detect(&self, sample: &str) -> Option<LanguageTag> {
        self.find(sample).map(|(_, tag)| tag)
    }

    /// Like [`detect`](Self::detect), but also returns the detector that
    /// matched.
    pub fn find(&self, sample: &str) -> Option<(&dyn LanguageDetector, LanguageTag)> {
        self.detectors.iter().find_map(|detector| {
            detector
                .detect(sample)
                .map(|tag| (detector.as_ref(), tag))
        })
    }

    /// Detector names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Return the number of detectors in the chain.
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Return `true` if the chain contains no detectors.
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorChain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DetectorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
