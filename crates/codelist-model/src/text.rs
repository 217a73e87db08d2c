//! Display texts for code list items.
//!
//! A text field is either a plain string or a map from language code to
//! string. Resolving a text for display always takes the current language as
//! an explicit argument:
//!
//! 1. a plain text resolves to itself for every language,
//! 2. a localized text resolves to the entry for the requested language,
//! 3. then to the entry for the fallback language, when one is given,
//! 4. and otherwise to the empty string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text content keyed by language code (e.g. `nb`, `nn`, `en`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for one language, if present.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    /// Returns a copy with the entry for `language` inserted or overwritten.
    #[must_use]
    pub fn with(&self, language: impl Into<String>, text: impl Into<String>) -> Self {
        let mut entries = self.0.clone();
        entries.insert(language.into(), text.into());
        Self(entries)
    }

    /// Languages that have an entry, in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L, T> FromIterator<(L, T)> for LocalizedText
where
    L: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(language, text)| (language.into(), text.into()))
                .collect(),
        )
    }
}

/// A label, description or help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Plain(String),
    Localized(LocalizedText),
}

impl TextValue {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Resolve the text shown for `language`.
    pub fn resolve<'a>(&'a self, language: &str, fallback_language: Option<&str>) -> &'a str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(texts) => texts
                .get(language)
                .or_else(|| fallback_language.and_then(|fallback| texts.get(fallback)))
                .unwrap_or(""),
        }
    }

    /// Returns a copy with the entry for `language` set to `text`.
    ///
    /// A plain text has no language of its own, so it is replaced by a
    /// localized text holding only the new entry.
    #[must_use]
    pub fn with_language(&self, language: &str, text: &str) -> Self {
        match self {
            Self::Plain(_) => Self::Localized(LocalizedText::new().with(language, text)),
            Self::Localized(texts) => Self::Localized(texts.with(language, text)),
        }
    }
}

impl Default for TextValue {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for TextValue {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<LocalizedText> for TextValue {
    fn from(value: LocalizedText) -> Self {
        Self::Localized(value)
    }
}
