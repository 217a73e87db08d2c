//! Value-type inference for code lists.
//!
//! A single scalar type is chosen for all values of a list. Checks run in
//! order and the first match wins:
//! 1. Empty list -> no type (`None`)
//! 2. Every value fits number -> `Number`
//! 3. Every value fits boolean -> `Boolean`
//! 4. Otherwise -> `String`

use codelist_model::{CodeList, CodeValue, ValueType};
use tracing::debug;

use crate::numeric::to_number;

/// Infer the value type governing every value of `list`.
pub fn infer_value_type(list: &CodeList) -> Option<ValueType> {
    if list.is_empty() {
        return None;
    }

    let value_type = if list.values().all(fits_number) {
        ValueType::Number
    } else if list.values().all(fits_boolean) {
        ValueType::Boolean
    } else {
        ValueType::String
    };

    debug!(
        items = list.len(),
        value_type = value_type.label(),
        "inferred code list value type"
    );
    Some(value_type)
}

/// True when the text form of `value` is `true` or `false`, ignoring case.
pub fn fits_boolean(value: &CodeValue) -> bool {
    let text = value.as_text().to_lowercase();
    text == "true" || text == "false"
}

/// True when `value` is a non-empty number that is not boolean-like.
///
/// The empty string converts to zero, so it is excluded explicitly; an empty
/// value therefore forces a list to `String`.
pub fn fits_number(value: &CodeValue) -> bool {
    !value.is_empty_str() && !to_number(value).is_nan() && !fits_boolean(value)
}

/// True when `value` can be converted to `value_type` without loss of meaning.
pub fn fits_type(value: &CodeValue, value_type: ValueType) -> bool {
    match value_type {
        ValueType::Number => fits_number(value),
        ValueType::Boolean => fits_boolean(value),
        ValueType::String => true,
    }
}
