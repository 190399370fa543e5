//! LanguageTag enum returned by the classifier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLanguageError;

/// Language of a code sample.
///
/// The set is closed: every classification yields exactly one of these, with
/// [`LanguageTag::Text`] as the terminal fallback. Names serialize as the
/// lowercase grammar identifiers a highlighter expects (`"dockerfile"`,
/// `"javascript"`, ...).
///
/// The enum derives [`Hash`], [`Eq`], and [`Copy`] so it can key maps and
/// be passed around by value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    /// Dockerfile instructions (`FROM`, `RUN`, ...)
    Dockerfile,
    /// Apache httpd configuration
    Apache,
    /// Nginx configuration
    Nginx,
    /// JSON documents
    Json,
    /// systemd unit files
    Systemd,
    /// `.env` files
    Dotenv,
    /// TOML documents
    Toml,
    /// YAML documents
    Yaml,
    /// JavaScript source
    Javascript,
    /// Python source
    Python,
    /// SQL statements
    Sql,
    /// Nix expressions
    Nix,
    /// KDL documents
    Kdl,
    /// Plain text (fallback)
    #[default]
    Text,
}

impl LanguageTag {
    /// Every tag, in classifier priority order with `Text` last.
    pub const ALL: [LanguageTag; 14] = [
        LanguageTag::Dockerfile,
        LanguageTag::Kdl,
        LanguageTag::Apache,
        LanguageTag::Nginx,
        LanguageTag::Json,
        LanguageTag::Systemd,
        LanguageTag::Dotenv,
        LanguageTag::Toml,
        LanguageTag::Sql,
        LanguageTag::Nix,
        LanguageTag::Yaml,
        LanguageTag::Javascript,
        LanguageTag::Python,
        LanguageTag::Text,
    ];

    /// Canonical lowercase name. Doubles as the highlighter grammar id and
    /// the label shown next to a rendered block.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageTag::Dockerfile => "dockerfile",
            LanguageTag::Apache => "apache",
            LanguageTag::Nginx => "nginx",
            LanguageTag::Json => "json",
            LanguageTag::Systemd => "systemd",
            LanguageTag::Dotenv => "dotenv",
            LanguageTag::Toml => "toml",
            LanguageTag::Yaml => "yaml",
            LanguageTag::Javascript => "javascript",
            LanguageTag::Python => "python",
            LanguageTag::Sql => "sql",
            LanguageTag::Nix => "nix",
            LanguageTag::Kdl => "kdl",
            LanguageTag::Text => "text",
        }
    }

    /// Returns `true` for the plain-text fallback.
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, LanguageTag::Text)
    }

    /// Grammar identifiers a highlighter should preload so that any
    /// classification result can be rendered without a second fetch.
    pub fn grammar_ids() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::as_str)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = ParseLanguageError;

    /// Parse a canonical name or a common alias, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let tag = match name.as_str() {
            "dockerfile" | "docker" => LanguageTag::Dockerfile,
            "apache" | "apacheconf" | "htaccess" => LanguageTag::Apache,
            "nginx" => LanguageTag::Nginx,
            "json" | "jsonc" => LanguageTag::Json,
            "systemd" => LanguageTag::Systemd,
            "dotenv" | "env" => LanguageTag::Dotenv,
            "toml" => LanguageTag::Toml,
            "yaml" | "yml" => LanguageTag::Yaml,
            "javascript" | "js" | "mjs" | "cjs" => LanguageTag::Javascript,
            "python" | "py" => LanguageTag::Python,
            "sql" | "postgresql" | "mysql" => LanguageTag::Sql,
            "nix" => LanguageTag::Nix,
            "kdl" => LanguageTag::Kdl,
            "text" | "txt" | "plain" | "plaintext" => LanguageTag::Text,
            _ => {
                return Err(ParseLanguageError {
                    name: s.trim().to_string(),
                });
            }
        };
        Ok(tag)
    }
}
