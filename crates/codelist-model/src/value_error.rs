//! Per-row validation errors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of error attached to a single code list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueError {
    /// Another row carries the same value.
    DuplicateValue,
    /// The value cannot be converted to the declared value type.
    TypeMismatch,
}

impl ValueError {
    /// Human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::DuplicateValue => "The value must be unique within the code list",
            Self::TypeMismatch => "The value does not match the type of the code list",
        }
    }
}

/// Map from row index to the error found on that row.
///
/// A missing key means the row has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueErrorMap(BTreeMap<usize, ValueError>);

impl ValueErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, error: ValueError) {
        self.0.insert(index, error);
    }

    /// Error for the row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<ValueError> {
        self.0.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    /// Flagged rows in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ValueError)> + '_ {
        self.0.iter().map(|(index, error)| (*index, *error))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, ValueError)> for ValueErrorMap {
    fn from_iter<I: IntoIterator<Item = (usize, ValueError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
