//! Editing session for one code list.
//!
//! The session keeps two lists:
//! - the **draft**, which is what the user sees and edits, valid or not;
//! - the **committed** list, the last draft that validated, in prepared form.
//!   Until the first commit it is the list the session was started or reset
//!   with, exactly as supplied.
//!
//! After every mutation the draft is validated. The host is notified through
//! [`CodeListHandler::on_change`] only when it validates; otherwise
//! [`CodeListHandler::on_invalid`] is called and the committed list stays as
//! it was.

use tracing::{debug, info_span};

use codelist_model::{
    CodeList, CodeListError, EditorOptions, TextProperty, ValueErrorMap, ValueType,
};
use codelist_transform::infer_value_type;
use codelist_validate::{are_there_code_list_errors, find_code_list_errors};

use crate::commit::{MutationError, commit};
use crate::mutation::Mutation;

/// Callbacks through which an editing session talks to its host.
pub trait CodeListHandler {
    /// A mutation produced a valid list.
    fn on_change(&mut self, list: &CodeList);

    /// A mutation produced a list with row errors; the update is withheld.
    fn on_invalid(&mut self, _errors: &ValueErrorMap) {}

    /// Focus left one of the list's inputs.
    fn on_blur_any(&mut self, _list: &CodeList) {}
}

impl<F> CodeListHandler for F
where
    F: FnMut(&CodeList),
{
    fn on_change(&mut self, list: &CodeList) {
        (self)(list);
    }
}

/// What happened to a mutation applied through [`CodeListEditor::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The draft validated and was committed.
    Committed,
    /// The draft has row errors and was not committed.
    Rejected,
}

/// Editing session holding the draft and committed state of one code list.
pub struct CodeListEditor<H: CodeListHandler> {
    draft: CodeList,
    committed: CodeList,
    errors: ValueErrorMap,
    options: EditorOptions,
    handler: H,
}

impl<H: CodeListHandler> CodeListEditor<H> {
    /// Start a session on `list`.
    ///
    /// The initial list is validated so row errors can be shown right away,
    /// but no callback fires until the first mutation.
    pub fn new(list: CodeList, options: EditorOptions, handler: H) -> Self {
        let errors = errors_for(&list, &options);
        Self {
            committed: list.clone(),
            draft: list,
            errors,
            options,
            handler,
        }
    }

    /// Apply a mutation to the draft.
    ///
    /// # Errors
    ///
    /// Returns the model error when the mutation addresses a missing row or
    /// cannot be applied; the session is left unchanged in that case. Values
    /// refused by a strict declared type are row errors, not failures: the
    /// draft keeps them and the outcome is [`ApplyOutcome::Rejected`].
    pub fn apply(&mut self, mutation: &Mutation) -> Result<ApplyOutcome, CodeListError> {
        let span = info_span!("code_list_mutation", mutation = mutation.kind());
        let _guard = span.enter();

        let draft = mutation.apply_to(&self.draft)?;
        match commit(draft.clone(), &self.options) {
            Ok(committed) => {
                self.draft = draft;
                self.errors = ValueErrorMap::new();
                self.committed = committed;
                debug!(items = self.committed.len(), "committed code list");
                self.handler.on_change(&self.committed);
                Ok(ApplyOutcome::Committed)
            }
            Err(MutationError::Invalid { list, errors }) => {
                self.draft = list;
                self.errors = errors;
                self.handler.on_invalid(&self.errors);
                Ok(ApplyOutcome::Rejected)
            }
            Err(MutationError::Model(error)) => Err(error),
        }
    }

    /// Report that focus left one of the inputs.
    pub fn blur(&mut self) {
        self.handler.on_blur_any(&self.draft);
    }

    /// Replace the session state with a list supplied by the host.
    pub fn reset(&mut self, list: CodeList) {
        self.errors = errors_for(&list, &self.options);
        self.committed = list.clone();
        self.draft = list;
    }

    /// The list as currently edited.
    pub fn draft(&self) -> &CodeList {
        &self.draft
    }

    /// The last list handed to the host (or the initial list).
    pub fn committed(&self) -> &CodeList {
        &self.committed
    }

    /// Row errors of the draft.
    pub fn errors(&self) -> &ValueErrorMap {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        are_there_code_list_errors(&self.errors)
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Inferred value type of the draft.
    pub fn value_type(&self) -> Option<ValueType> {
        infer_value_type(&self.draft)
    }

    /// Text shown for one field of one row in `language`.
    ///
    /// Returns `None` for a missing row or an unset optional field.
    pub fn display_text(&self, index: usize, property: TextProperty, language: &str) -> Option<&str> {
        let text = self.draft.get(index)?.text(property)?;
        Some(text.resolve(language, self.options.fallback_language()))
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

/// Row errors of `list` as it would be committed.
fn errors_for(list: &CodeList, options: &EditorOptions) -> ValueErrorMap {
    match commit(list.clone(), options) {
        Ok(_) => ValueErrorMap::new(),
        Err(MutationError::Invalid { errors, .. }) => errors,
        Err(MutationError::Model(_)) => find_code_list_errors(list),
    }
}
