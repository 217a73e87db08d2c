//! Validity-gated commits.
//!
//! A mutated list only leaves the module when it validates. The candidate is
//! prepared (coerced to the declared type, or normalized to its inferred type)
//! and validated; on failure the un-prepared draft comes back together with
//! its row errors so a caller can keep rendering it.

use thiserror::Error;
use tracing::{debug, warn};

use codelist_model::{CodeList, CodeListError, EditorOptions, ValueErrorMap};
use codelist_transform::{coerce_with_policy, update_code_list_value_type};
use codelist_validate::{find_code_list_errors, find_value_type_errors};

use crate::mutation::Mutation;

#[derive(Debug, Error)]
pub enum MutationError {
    /// The mutated list has row errors and must not be propagated.
    #[error("code list has {} invalid row(s)", .errors.len())]
    Invalid {
        /// The rejected draft, exactly as mutated.
        list: CodeList,
        errors: ValueErrorMap,
    },
    #[error(transparent)]
    Model(#[from] CodeListError),
}

/// Apply `mutation` to `list` and return the committed result.
///
/// # Errors
///
/// - [`MutationError::Model`] when the mutation addresses a missing row or
///   cannot be applied to the list.
/// - [`MutationError::Invalid`] when the result has row errors, including
///   values that do not fit a strictly declared value type.
pub fn apply_mutation(
    list: &CodeList,
    mutation: &Mutation,
    options: &EditorOptions,
) -> Result<CodeList, MutationError> {
    let draft = mutation.apply_to(list)?;
    debug!(mutation = mutation.kind(), items = draft.len(), "applied mutation");
    commit(draft, options)
}

/// Prepare and validate a draft list for commit.
///
/// Rows are flagged when their value repeats in the prepared list or in the
/// draft itself (lenient coercion turns every non-numeric value into `NaN`,
/// which never compares equal), and when a strict coercion refuses them.
///
/// # Errors
///
/// See [`apply_mutation`].
pub fn commit(draft: CodeList, options: &EditorOptions) -> Result<CodeList, MutationError> {
    let candidate = match prepare(&draft, options) {
        Ok(candidate) => candidate,
        Err(CodeListError::Coercion { target, .. }) => {
            let mut errors = find_code_list_errors(&draft);
            merge_errors(&mut errors, find_value_type_errors(&draft, target));
            return Err(reject(draft, errors));
        }
        Err(error) => return Err(error.into()),
    };

    let mut errors = find_code_list_errors(&candidate);
    merge_errors(&mut errors, find_code_list_errors(&draft));
    if errors.is_empty() {
        Ok(candidate)
    } else {
        Err(reject(draft, errors))
    }
}

fn reject(draft: CodeList, errors: ValueErrorMap) -> MutationError {
    warn!(
        errors = errors.len(),
        "code list is invalid, withholding update"
    );
    MutationError::Invalid {
        list: draft,
        errors,
    }
}

fn merge_errors(errors: &mut ValueErrorMap, more: ValueErrorMap) {
    for (index, error) in more.iter() {
        errors.insert(index, error);
    }
}

/// The form a draft takes once committed.
///
/// # Errors
///
/// Returns [`CodeListError::Coercion`] when a declared value type is
/// configured with the strict policy and a value does not fit it.
pub fn prepare(draft: &CodeList, options: &EditorOptions) -> Result<CodeList, CodeListError> {
    if let Some(value_type) = options.value_type {
        return coerce_with_policy(draft, Some(value_type), options.coercion);
    }
    if options.normalize_on_commit {
        Ok(update_code_list_value_type(draft))
    } else {
        Ok(draft.clone())
    }
}
