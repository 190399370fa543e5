//! Declared-language hints carried on markup.
//!
//! Code blocks written by an editor usually carry their language as a class
//! token (`<code class="language-yaml">`). A recognised token is
//! authoritative and bypasses heuristics; anything else leaves the decision
//! to the classifier.

use std::collections::BTreeMap;

use super::types::LanguageTag;

/// Class-token prefixes that declare a language.
pub const HINT_CLASS_PREFIXES: &[&str] = &["language-", "lang-"];

/// Read the declared language from an HTML `class` attribute value.
///
/// Tokens are scanned left to right; the first one carrying a
/// [`HINT_CLASS_PREFIXES`] prefix and naming a known language wins.
/// `aliases` (keys matched case-insensitively) are consulted before the
/// built-in names, so a config can map e.g. `sh` to `text`.
///
/// Unknown names are logged and skipped. `None` means heuristics should
/// run.
pub fn declared_language(
    class_attr: &str,
    aliases: &BTreeMap<String, String>,
) -> Option<LanguageTag> {
    for token in class_attr.split_ascii_whitespace() {
        let Some(name) = HINT_CLASS_PREFIXES
            .iter()
            .find_map(|prefix| token.strip_prefix(prefix))
        else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let aliased = aliases
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, target)| target.as_str());

        match aliased.unwrap_or(name).parse::<LanguageTag>() {
            Ok(tag) => return Some(tag),
            Err(e) => tracing::warn!(class = token, error = %e, "ignoring language hint"),
        }
    }
    None
}
