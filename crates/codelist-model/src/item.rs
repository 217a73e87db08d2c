//! Code list items and the code list container.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::text::TextValue;
use crate::value::CodeValue;

/// One entry of a selectable code list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeListItem {
    /// Machine-readable code.
    pub value: CodeValue,

    /// Text shown to the end user.
    pub label: TextValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TextValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<TextValue>,
}

impl CodeListItem {
    /// Create an item with a value and a plain label.
    pub fn new(value: impl Into<CodeValue>, label: impl Into<TextValue>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            help_text: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<TextValue>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_help_text(mut self, help_text: impl Into<TextValue>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Text field selected by `property`.
    pub fn text(&self, property: TextProperty) -> Option<&TextValue> {
        match property {
            TextProperty::Label => Some(&self.label),
            TextProperty::Description => self.description.as_ref(),
            TextProperty::HelpText => self.help_text.as_ref(),
        }
    }
}

/// The text fields of a code list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextProperty {
    Label,
    Description,
    HelpText,
}

impl TextProperty {
    pub const ALL: [TextProperty; 3] = [Self::Label, Self::Description, Self::HelpText];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Description => "description",
            Self::HelpText => "helpText",
        }
    }
}

/// An ordered code list.
///
/// Rows are identified by position, so insertion order is significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeList(Vec<CodeListItem>);

impl CodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CodeListItem] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&CodeListItem> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeListItem> {
        self.0.iter()
    }

    /// Iterate over the item values in order.
    pub fn values(&self) -> impl Iterator<Item = &CodeValue> {
        self.0.iter().map(|item| &item.value)
    }

    pub fn into_items(self) -> Vec<CodeListItem> {
        self.0
    }
}

impl From<Vec<CodeListItem>> for CodeList {
    fn from(items: Vec<CodeListItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<CodeListItem> for CodeList {
    fn from_iter<I: IntoIterator<Item = CodeListItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for CodeList {
    type Output = CodeListItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CodeList {
    type Item = &'a CodeListItem;
    type IntoIter = std::slice::Iter<'a, CodeListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CodeList {
    type Item = CodeListItem;
    type IntoIter = std::vec::IntoIter<CodeListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
