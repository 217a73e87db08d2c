//! Code list validation.
//!
//! Errors are returned as data, never raised: [`find_code_list_errors`]
//! produces a map from row index to error, recomputed from scratch on every
//! call, and the aggregate checks are derived from that map.

mod checks;
pub mod report;
pub mod title;

pub use report::ValidationReport;
pub use title::{is_valid_code_list_title, validate_code_list_title};

use codelist_model::{CodeList, ValueErrorMap, ValueType};
use codelist_transform::infer_value_type;
use tracing::debug;

/// Find all row errors in `list`.
pub fn find_code_list_errors(list: &CodeList) -> ValueErrorMap {
    let errors = checks::run_all(list);
    debug!(
        items = list.len(),
        errors = errors.len(),
        "validated code list"
    );
    errors
}

/// Find the rows of `list` whose value does not fit `value_type`.
pub fn find_value_type_errors(list: &CodeList, value_type: ValueType) -> ValueErrorMap {
    let errors = checks::run_type_check(list, value_type);
    debug!(
        value_type = value_type.label(),
        errors = errors.len(),
        "checked declared value type"
    );
    errors
}

/// True when `errors` contains at least one row error.
pub fn are_there_code_list_errors(errors: &ValueErrorMap) -> bool {
    !errors.is_empty()
}

/// True when `list` has no row errors.
pub fn is_code_list_valid(list: &CodeList) -> bool {
    !are_there_code_list_errors(&find_code_list_errors(list))
}

/// Build a full validation report for `list`.
pub fn validate_code_list(title: Option<&str>, list: &CodeList) -> ValidationReport {
    ValidationReport {
        title: title.map(str::to_string),
        item_count: list.len(),
        value_type: infer_value_type(list),
        errors: find_code_list_errors(list),
    }
}
