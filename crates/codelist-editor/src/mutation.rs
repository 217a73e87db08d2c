//! Pure code list mutations.
//!
//! Every function returns a new list or item and leaves its input untouched.
//! Rows are addressed by index; an index outside the list is reported as
//! [`CodeListError::IndexOutOfRange`] instead of being ignored.

use serde::{Deserialize, Serialize};

use codelist_model::{
    CodeList, CodeListError, CodeListItem, CodeValue, LocalizedText, Result, TextProperty,
    TextValue, ValueType,
};
use codelist_transform::infer_value_type;

/// Append an item with an empty value and an empty label.
pub fn add_new_code_list_item(list: &CodeList) -> CodeList {
    with_item_appended(list, CodeListItem::new(CodeValue::empty(), ""))
}

/// Append an empty item whose value has the type of the list.
///
/// `value_type` is the declared type; without one the type is inferred from
/// the list. Numbers start at `0`; booleans take the first of `false` and
/// `true` that the list does not use yet; strings start empty.
///
/// # Errors
///
/// Returns [`CodeListError::NoFreeBooleanValue`] when a boolean list already
/// holds both values.
pub fn add_new_typed_code_list_item(
    list: &CodeList,
    value_type: Option<ValueType>,
) -> Result<CodeList> {
    let value = match value_type.or_else(|| infer_value_type(list)) {
        Some(ValueType::Number) => CodeValue::Num(0.0),
        Some(ValueType::Boolean) => CodeValue::Bool(free_boolean(list)?),
        Some(ValueType::String) | None => CodeValue::empty(),
    };
    Ok(with_item_appended(list, CodeListItem::new(value, "")))
}

/// Append an item with an empty value and an empty label for each language.
pub fn add_new_localized_code_list_item(list: &CodeList, languages: &[String]) -> CodeList {
    let label: LocalizedText = languages
        .iter()
        .map(|language| (language.as_str(), ""))
        .collect();
    with_item_appended(list, CodeListItem::new(CodeValue::empty(), label))
}

/// Remove the item at `index`.
///
/// # Errors
///
/// Returns [`CodeListError::IndexOutOfRange`] when `index >= list.len()`.
pub fn remove_code_list_item(list: &CodeList, index: usize) -> Result<CodeList> {
    check_index(list, index)?;
    Ok(list
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, item)| item.clone())
        .collect())
}

/// Replace the item at `index` wholesale.
///
/// # Errors
///
/// Returns [`CodeListError::IndexOutOfRange`] when `index >= list.len()`.
pub fn change_code_list_item(list: &CodeList, index: usize, item: CodeListItem) -> Result<CodeList> {
    check_index(list, index)?;
    let mut items = list.items().to_vec();
    items[index] = item;
    Ok(CodeList::from(items))
}

/// Replace the value with the raw string typed by the user.
///
/// The list as a whole is normalized separately.
pub fn change_value(item: &CodeListItem, value: &str) -> CodeListItem {
    CodeListItem {
        value: CodeValue::from(value),
        ..item.clone()
    }
}

pub fn change_label(item: &CodeListItem, label: &str) -> CodeListItem {
    change_text(item, TextProperty::Label, &TextEdit::plain(label))
}

pub fn change_description(item: &CodeListItem, description: &str) -> CodeListItem {
    change_text(item, TextProperty::Description, &TextEdit::plain(description))
}

pub fn change_help_text(item: &CodeListItem, help_text: &str) -> CodeListItem {
    change_text(item, TextProperty::HelpText, &TextEdit::plain(help_text))
}

/// Set the label text for one language, keeping the other languages.
pub fn change_label_in(item: &CodeListItem, language: &str, label: &str) -> CodeListItem {
    change_text(item, TextProperty::Label, &TextEdit::localized(language, label))
}

pub fn change_description_in(
    item: &CodeListItem,
    language: &str,
    description: &str,
) -> CodeListItem {
    change_text(
        item,
        TextProperty::Description,
        &TextEdit::localized(language, description),
    )
}

pub fn change_help_text_in(item: &CodeListItem, language: &str, help_text: &str) -> CodeListItem {
    change_text(
        item,
        TextProperty::HelpText,
        &TextEdit::localized(language, help_text),
    )
}

/// Apply one text edit to the field selected by `property`.
pub fn change_text(item: &CodeListItem, property: TextProperty, edit: &TextEdit) -> CodeListItem {
    let current = item.text(property);
    let text = edit.apply(current);
    let mut updated = item.clone();
    match property {
        TextProperty::Label => updated.label = text,
        TextProperty::Description => updated.description = Some(text),
        TextProperty::HelpText => updated.help_text = Some(text),
    }
    updated
}

/// An edit of one text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextEdit {
    /// Replace the whole field with a plain text.
    Plain(String),
    /// Insert or overwrite the entry for one language.
    Localized { language: String, text: String },
}

impl TextEdit {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn localized(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Localized {
            language: language.into(),
            text: text.into(),
        }
    }

    fn apply(&self, current: Option<&TextValue>) -> TextValue {
        match self {
            Self::Plain(text) => TextValue::Plain(text.clone()),
            Self::Localized { language, text } => match current {
                Some(current) => current.with_language(language, text),
                None => TextValue::Localized(LocalizedText::new().with(language, text)),
            },
        }
    }
}

/// A single change to a code list, as issued by an editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Mutation {
    /// Append an empty item.
    AddItem,
    /// Append an empty item of the declared type, or of the inferred type
    /// when none is given.
    AddTypedItem {
        #[serde(default, rename = "valueType")]
        value_type: Option<ValueType>,
    },
    /// Append an empty item with an empty label per language.
    AddLocalizedItem { languages: Vec<String> },
    /// Remove the item at `index`.
    RemoveItem { index: usize },
    /// Replace the item at `index`.
    ReplaceItem { index: usize, item: CodeListItem },
    /// Set the raw value of the item at `index`.
    ChangeValue { index: usize, value: String },
    /// Edit one text field of the item at `index`.
    ChangeText {
        index: usize,
        property: TextProperty,
        edit: TextEdit,
    },
}

impl Mutation {
    /// Apply the mutation without validating the result.
    ///
    /// # Errors
    ///
    /// Returns [`CodeListError::IndexOutOfRange`] when the mutation addresses
    /// a row that does not exist.
    pub fn apply_to(&self, list: &CodeList) -> Result<CodeList> {
        match self {
            Self::AddItem => Ok(add_new_code_list_item(list)),
            Self::AddTypedItem { value_type } => add_new_typed_code_list_item(list, *value_type),
            Self::AddLocalizedItem { languages } => {
                Ok(add_new_localized_code_list_item(list, languages))
            }
            Self::RemoveItem { index } => remove_code_list_item(list, *index),
            Self::ReplaceItem { index, item } => change_code_list_item(list, *index, item.clone()),
            Self::ChangeValue { index, value } => {
                let item = item_at(list, *index)?;
                change_code_list_item(list, *index, change_value(item, value))
            }
            Self::ChangeText {
                index,
                property,
                edit,
            } => {
                let item = item_at(list, *index)?;
                change_code_list_item(list, *index, change_text(item, *property, edit))
            }
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddItem => "addItem",
            Self::AddTypedItem { .. } => "addTypedItem",
            Self::AddLocalizedItem { .. } => "addLocalizedItem",
            Self::RemoveItem { .. } => "removeItem",
            Self::ReplaceItem { .. } => "replaceItem",
            Self::ChangeValue { .. } => "changeValue",
            Self::ChangeText { .. } => "changeText",
        }
    }
}

fn with_item_appended(list: &CodeList, item: CodeListItem) -> CodeList {
    let mut items = list.items().to_vec();
    items.push(item);
    CodeList::from(items)
}

fn free_boolean(list: &CodeList) -> Result<bool> {
    let in_use = |flag: bool| {
        let text = if flag { "true" } else { "false" };
        list.values()
            .any(|value| value.as_text().eq_ignore_ascii_case(text))
    };
    [false, true]
        .into_iter()
        .find(|flag| !in_use(*flag))
        .ok_or(CodeListError::NoFreeBooleanValue)
}

fn check_index(list: &CodeList, index: usize) -> Result<()> {
    if index < list.len() {
        Ok(())
    } else {
        Err(CodeListError::IndexOutOfRange {
            index,
            len: list.len(),
        })
    }
}

fn item_at(list: &CodeList, index: usize) -> Result<&CodeListItem> {
    list.get(index).ok_or(CodeListError::IndexOutOfRange {
        index,
        len: list.len(),
    })
}
