use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar type governing all values of a code list.
///
/// Inference yields `Option<ValueType>`; `None` means the list places no
/// constraint on its values (it is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
}

impl ValueType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Parse a type label (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of an inference result, `"undefined"` for `None`.
pub fn value_type_label(value_type: Option<ValueType>) -> &'static str {
    value_type.as_ref().map_or("undefined", ValueType::label)
}
