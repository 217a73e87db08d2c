//! Code list title validation.
//!
//! Titles become file names in the content repository, so only Latin
//! letters (including the Norwegian `æøå`), digits, underscores and hyphens
//! are accepted.

use codelist_model::CodeListError;

/// Check that `title` is a usable code list title.
///
/// # Errors
///
/// Returns [`CodeListError::InvalidTitle`] for an empty title or one
/// containing any other character.
pub fn validate_code_list_title(title: &str) -> Result<(), CodeListError> {
    if is_valid_code_list_title(title) {
        Ok(())
    } else {
        Err(CodeListError::InvalidTitle(title.to_string()))
    }
}

pub fn is_valid_code_list_title(title: &str) -> bool {
    !title.is_empty() && title.chars().all(is_title_char)
}

fn is_title_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | 'æ' | 'ø' | 'å' | 'Æ' | 'Ø' | 'Å')
}
