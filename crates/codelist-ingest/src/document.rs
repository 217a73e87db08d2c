//! Code list JSON documents.
//!
//! A document is a JSON array of items. Every item must carry a non-null
//! `value` and `label`; `description` and `helpText` are optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use codelist_model::{CodeList, CodeListItem};
use codelist_validate::validate_code_list_title;

use crate::error::{IngestError, Result};

const REQUIRED_FIELDS: [&str; 2] = ["value", "label"];

/// A code list read from an uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeListUpload {
    /// Code list id, taken from the file stem.
    pub id: String,
    pub code_list: CodeList,
}

/// Parse a code list document.
///
/// # Errors
///
/// Fails when the text is not JSON, is not an array, or contains an item
/// without `value` or `label`.
pub fn parse_code_list(json: &str) -> Result<CodeList> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(elements) = document else {
        return Err(IngestError::NotAnArray);
    };

    let mut items = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        for field in REQUIRED_FIELDS {
            if element.get(field).is_none_or(Value::is_null) {
                return Err(IngestError::MissingField { index, field });
            }
        }
        let item: CodeListItem = serde_json::from_value(element)
            .map_err(|source| IngestError::InvalidItem { index, source })?;
        items.push(item);
    }

    debug!(items = items.len(), "parsed code list document");
    Ok(CodeList::from(items))
}

/// Read and parse a code list file.
pub fn read_code_list(path: &Path) -> Result<CodeList> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let list = parse_code_list(&text)?;
    info!(path = %path.display(), items = list.len(), "loaded code list");
    Ok(list)
}

/// Read an uploaded code list file; the file stem becomes the code list id.
///
/// # Errors
///
/// Besides the parse errors of [`parse_code_list`], fails when the file stem
/// is not a valid code list title.
pub fn read_upload(path: &Path) -> Result<CodeListUpload> {
    let id = code_list_id_from_path(path)?;
    validate_code_list_title(&id)?;
    let code_list = read_code_list(path)?;
    Ok(CodeListUpload { id, code_list })
}

/// Serialize a code list as pretty-printed JSON.
pub fn to_json_string(list: &CodeList) -> Result<String> {
    Ok(serde_json::to_string_pretty(list)?)
}

/// Write a code list to `path` as pretty-printed JSON.
pub fn write_code_list(path: &Path, list: &CodeList) -> Result<()> {
    let mut text = to_json_string(list)?;
    text.push('\n');
    fs::write(path, text).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), items = list.len(), "wrote code list");
    Ok(())
}

fn code_list_id_from_path(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| IngestError::MissingFileName {
            path: PathBuf::from(path),
        })
}
