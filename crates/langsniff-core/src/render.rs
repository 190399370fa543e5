//! Rendering boundary between the classifier and a syntax highlighter.
//!
//! The classifier runs first and synchronously. Whatever highlighter the
//! caller plugs in then renders the block; a highlighter failure on a real
//! grammar is retried as `text` instead of reaching the caller.

use serde::Serialize;

use crate::classifier::Classifier;
use crate::error::HighlightError;
use crate::language::LanguageTag;

/// A syntax highlighter collaborator.
///
/// Any `Fn(&str, LanguageTag) -> Result<String, HighlightError>` closure is a
/// highlighter.
pub trait Highlighter {
    /// Render `code` as markup using the grammar for `language`.
    fn highlight(&self, code: &str, language: LanguageTag) -> Result<String, HighlightError>;
}

impl<F> Highlighter for F
where
    F: Fn(&str, LanguageTag) -> Result<String, HighlightError>,
{
    fn highlight(&self, code: &str, language: LanguageTag) -> Result<String, HighlightError> {
        self(code, language)
    }
}

/// Highlighter that emits an unstyled `<pre><code class="language-xxx">`
/// block with the code HTML-escaped. Every language is supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassMarkup;

impl Highlighter for ClassMarkup {
    fn highlight(&self, code: &str, language: LanguageTag) -> Result<String, HighlightError> {
        Ok(format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            language,
            html_escape::encode_text(code)
        ))
    }
}

/// Result of [`render_block`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    /// Language the markup was actually rendered with.
    pub language: LanguageTag,
    /// Label to show next to the block.
    pub label: String,
    pub html: String,
    /// `true` when the classified language failed to render and `text` was
    /// used instead.
    pub fell_back: bool,
}

/// Classify `code`, then render it with `highlighter`.
///
/// If rendering with the classified language fails, the block is rendered
/// again as `text`. Only a failure of the `text` render itself is returned.
///
/// # Examples
///
/// ```
/// use langsniff_core::render::{ClassMarkup, render_block};
/// use langsniff_core::{Classifier, LanguageTag};
///
/// let block = render_block(&ClassMarkup, &Classifier::new(), "key: <v>", None).unwrap();
/// assert_eq!(block.language, LanguageTag::Yaml);
/// assert_eq!(
///     block.html,
///     "<pre><code class=\"language-yaml\">key: &lt;v&gt;</code></pre>"
/// );
/// ```
pub fn render_block<H>(
    highlighter: &H,
    classifier: &Classifier,
    code: &str,
    hint: Option<LanguageTag>,
) -> Result<RenderedBlock, HighlightError>
where
    H: Highlighter + ?Sized,
{
    let language = classifier.classify(Some(code), hint);

    match highlighter.highlight(code, language) {
        Ok(html) => Ok(RenderedBlock {
            language,
            label: language.to_string(),
            html,
            fell_back: false,
        }),
        Err(e) if !language.is_fallback() => {
            tracing::warn!(language = %language, error = %e, "highlighting failed, rendering as text");
            let html = highlighter.highlight(code, LanguageTag::Text)?;
            Ok(RenderedBlock {
                language: LanguageTag::Text,
                label: LanguageTag::Text.to_string(),
                html,
                fell_back: true,
            })
        }
        Err(e) => Err(e),
    }
}
