//! Value coercion for code lists.
//!
//! Every value of a list is rewritten to one target type:
//! - `Number`: the numeric form of the value (booleans become `1`/`0`)
//! - `Boolean`: `true` when the text form is `true` in any case, otherwise `false`
//! - `String` or no type: the text form of the value
//!
//! All functions return a new list and leave the input untouched.

use codelist_model::{CodeList, CodeListError, CodeListItem, CodeValue, CoercionPolicy, ValueType};
use tracing::{debug, warn};

use crate::inference::{fits_type, infer_value_type};
use crate::numeric::to_number;

/// Convert a single value to `target`.
pub fn coerce_value(value: &CodeValue, target: Option<ValueType>) -> CodeValue {
    match target {
        Some(ValueType::Number) => match value {
            CodeValue::Num(n) => CodeValue::Num(*n),
            other => CodeValue::Num(to_number(other)),
        },
        Some(ValueType::Boolean) => match value {
            CodeValue::Bool(b) => CodeValue::Bool(*b),
            other => CodeValue::Bool(other.as_text().to_lowercase() == "true"),
        },
        Some(ValueType::String) | None => match value {
            CodeValue::Str(s) => CodeValue::Str(s.clone()),
            other => CodeValue::Str(other.as_text()),
        },
    }
}

/// Rewrite every value of `list` to `target`.
///
/// Values that do not fit the target degrade silently (`NaN`, `false`).
pub fn coerce(list: &CodeList, target: Option<ValueType>) -> CodeList {
    list.iter()
        .map(|item| with_value(item, coerce_value(&item.value, target)))
        .collect()
}

/// Rewrite every value of `list` to `target`, honoring `policy`.
///
/// # Errors
///
/// With [`CoercionPolicy::Strict`], returns [`CodeListError::Coercion`] for
/// the first value that does not fit `target`.
pub fn coerce_with_policy(
    list: &CodeList,
    target: Option<ValueType>,
    policy: CoercionPolicy,
) -> Result<CodeList, CodeListError> {
    if policy == CoercionPolicy::Strict
        && let Some(target) = target
        && let Some((index, item)) = list
            .iter()
            .enumerate()
            .find(|(_, item)| !fits_type(&item.value, target))
    {
        warn!(
            index,
            target = target.label(),
            "code list value does not fit the requested type"
        );
        return Err(CodeListError::Coercion {
            index,
            value: item.value.as_text(),
            target,
        });
    }

    Ok(coerce(list, target))
}

/// Infer the value type of `list` and coerce every value to it.
pub fn update_code_list_value_type(list: &CodeList) -> CodeList {
    let value_type = infer_value_type(list);
    debug!(items = list.len(), "normalizing code list values");
    coerce(list, value_type)
}

fn with_value(item: &CodeListItem, value: CodeValue) -> CodeListItem {
    CodeListItem {
        value,
        ..item.clone()
    }
}
