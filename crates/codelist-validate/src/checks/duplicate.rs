//! Value uniqueness validation.
//!
//! Every row whose value equals the value of another row is flagged, so both
//! the first and the later occurrences of a duplicate are reported.

use std::collections::HashMap;

use codelist_model::{CodeList, CodeValue, ValueError};

/// Hashable stand-in for a code value under strict equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey<'a> {
    Str(&'a str),
    Num(u64),
    Bool(bool),
}

/// Key for `value`, or `None` for `NaN`, which equals nothing.
fn value_key(value: &CodeValue) -> Option<ValueKey<'_>> {
    match value {
        CodeValue::Str(s) => Some(ValueKey::Str(s)),
        CodeValue::Bool(b) => Some(ValueKey::Bool(*b)),
        CodeValue::Num(n) if n.is_nan() => None,
        // -0 and 0 are the same value
        CodeValue::Num(n) if *n == 0.0 => Some(ValueKey::Num(0.0f64.to_bits())),
        CodeValue::Num(n) => Some(ValueKey::Num(n.to_bits())),
    }
}

/// Indices of all rows that share their value with another row.
pub fn check(list: &CodeList) -> Vec<(usize, ValueError)> {
    let mut rows_by_value: HashMap<ValueKey<'_>, Vec<usize>> = HashMap::new();
    for (index, value) in list.values().enumerate() {
        if let Some(key) = value_key(value) {
            rows_by_value.entry(key).or_default().push(index);
        }
    }

    let mut flagged: Vec<(usize, ValueError)> = rows_by_value
        .into_values()
        .filter(|rows| rows.len() > 1)
        .flatten()
        .map(|index| (index, ValueError::DuplicateValue))
        .collect();
    flagged.sort_by_key(|(index, _)| *index);
    flagged
}
