//! Declared value type validation.
//!
//! Flags every row whose value cannot be converted to the value type the
//! code list is declared with.

use codelist_model::{CodeList, ValueError, ValueType};
use codelist_transform::fits_type;

/// Indices of all rows whose value does not fit `target`.
pub fn check(list: &CodeList, target: ValueType) -> Vec<(usize, ValueError)> {
    list.values()
        .enumerate()
        .filter(|(_, value)| !fits_type(value, target))
        .map(|(index, _)| (index, ValueError::TypeMismatch))
        .collect()
}
