//! Validation report containing all row errors for a code list.

use serde::{Deserialize, Serialize};

use codelist_model::{ValueError, ValueErrorMap, ValueType};

/// Validation report for one code list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Code list title, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Number of rows checked.
    pub item_count: usize,

    /// Inferred value type (`None` for an empty list).
    pub value_type: Option<ValueType>,

    /// Row errors keyed by index.
    pub errors: ValueErrorMap,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Rows carrying `kind`, in ascending order.
    pub fn rows_with(&self, kind: ValueError) -> Vec<usize> {
        self.errors
            .iter()
            .filter(|(_, error)| *error == kind)
            .map(|(index, _)| index)
            .collect()
    }
}
