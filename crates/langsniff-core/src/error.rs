//! Error types for the fallible edges around the classifier.
//!
//! Classification itself never fails; these cover tag parsing, config
//! loading, and the highlighting collaborator.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigWarning;
use crate::language::LanguageTag;

/// A language name that is not one of the known tags or aliases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language '{name}'")]
pub struct ParseLanguageError {
    pub name: String,
}

/// Errors that can occur when loading or building a
/// [`ClassifierConfig`](crate::ClassifierConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Validation produced warnings that were promoted to errors.
    #[error("configuration validation failed with {} warning(s)", .0.len())]
    ValidationFailed(Vec<ConfigWarning>),
}

/// Failure reported by a [`Highlighter`](crate::Highlighter).
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("grammar '{language}' is not loaded")]
    GrammarUnavailable { language: LanguageTag },

    #[error("highlighting failed for '{language}': {message}")]
    Render {
        language: LanguageTag,
        message: String,
    },

    #[error(transparent)]
    Other(anyhow::Error),
}

impl HighlightError {
    /// Language the highlighter was asked to render, when known.
    pub fn language(&self) -> Option<LanguageTag> {
        match self {
            HighlightError::GrammarUnavailable { language }
            | HighlightError::Render { language, .. } => Some(*language),
            HighlightError::Other(_) => None,
        }
    }
}
