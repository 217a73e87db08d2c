use thiserror::Error;

use crate::value_type::ValueType;

#[derive(Debug, Error)]
pub enum CodeListError {
    #[error("index {index} is out of range for a code list with {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("value {value:?} at row {index} cannot be converted to {target}")]
    Coercion {
        index: usize,
        value: String,
        target: ValueType,
    },
    #[error("a boolean code list already holds both true and false")]
    NoFreeBooleanValue,
    #[error(
        "invalid code list title {0:?}: only Latin characters, numbers, underscores and hyphens are allowed"
    )]
    InvalidTitle(String),
    #[error("invalid code list format: {0}")]
    InvalidFormat(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodeListError>;
