//! Configuration options for code list editing.

use serde::{Deserialize, Serialize};

use crate::value_type::ValueType;

/// Default fallback language for localized texts (Norwegian Bokmål).
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "nb";

/// How coercion treats values that do not fit the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoercionPolicy {
    /// Accept degenerate results (`NaN` for numbers, `false` for booleans).
    #[default]
    Lenient,
    /// Report a coercion error for the first value that does not fit.
    Strict,
}

/// Options controlling how the editor normalizes and resolves code lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Coercion behavior for explicitly requested value types.
    pub coercion: CoercionPolicy,

    /// Language used when a localized text has no entry for the current language.
    pub fallback_language: Option<String>,

    /// Normalize value types before validating and committing a list.
    pub normalize_on_commit: bool,

    /// Declared value type. When set, lists are coerced to this type with the
    /// configured policy instead of having their type inferred.
    pub value_type: Option<ValueType>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            coercion: CoercionPolicy::Lenient,
            fallback_language: Some(DEFAULT_FALLBACK_LANGUAGE.to_string()),
            normalize_on_commit: true,
            value_type: None,
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that refuse degenerate coercions and never guess a display language.
    pub fn strict() -> Self {
        Self {
            coercion: CoercionPolicy::Strict,
            fallback_language: None,
            normalize_on_commit: true,
            value_type: None,
        }
    }

    #[must_use]
    pub fn with_coercion(mut self, policy: CoercionPolicy) -> Self {
        self.coercion = policy;
        self
    }

    #[must_use]
    pub fn with_fallback_language(mut self, language: Option<String>) -> Self {
        self.fallback_language = language;
        self
    }

    #[must_use]
    pub fn with_normalize_on_commit(mut self, enable: bool) -> Self {
        self.normalize_on_commit = enable;
        self
    }

    #[must_use]
    pub fn with_value_type(mut self, value_type: Option<ValueType>) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn fallback_language(&self) -> Option<&str> {
        self.fallback_language.as_deref()
    }
}
