//! Code list editing.
//!
//! - [`mutation`]: pure functions producing new lists and items
//! - [`commit`]: [`apply_mutation`], which only returns lists that validate
//! - [`editor`]: [`CodeListEditor`], a session that notifies its host through
//!   [`CodeListHandler`] callbacks

pub mod commit;
pub mod editor;
pub mod mutation;

pub use commit::{MutationError, apply_mutation, commit, prepare};
pub use editor::{ApplyOutcome, CodeListEditor, CodeListHandler};
pub use mutation::{
    Mutation, TextEdit, add_new_code_list_item, add_new_localized_code_list_item,
    add_new_typed_code_list_item, change_code_list_item, change_description,
    change_description_in, change_help_text, change_help_text_in, change_label,
    change_label_in, change_text, change_value, remove_code_list_item,
};
