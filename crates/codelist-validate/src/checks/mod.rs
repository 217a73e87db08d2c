//! Validation check modules.
//!
//! Each module performs one kind of row-level check.

mod duplicate;
mod value_type;

use codelist_model::{CodeList, ValueErrorMap, ValueType};

/// Run all row-level checks on a code list.
pub fn run_all(list: &CodeList) -> ValueErrorMap {
    let mut errors = ValueErrorMap::new();

    // 1. Value uniqueness
    for (index, error) in duplicate::check(list) {
        errors.insert(index, error);
    }

    errors
}

/// Check every row against a declared value type.
pub fn run_type_check(list: &CodeList, target: ValueType) -> ValueErrorMap {
    value_type::check(list, target).into_iter().collect()
}
