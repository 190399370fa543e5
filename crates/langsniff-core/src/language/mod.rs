//! Language tags and declared-language hints.

mod markup;
mod types;

pub use markup::{HINT_CLASS_PREFIXES, declared_language};
pub use types::LanguageTag;
