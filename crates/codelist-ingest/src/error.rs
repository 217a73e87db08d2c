//! Error types for code list ingestion.

use std::path::PathBuf;
use thiserror::Error;

use codelist_model::CodeListError;

/// Errors that can occur while reading or writing code list documents.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Upload path has no usable file name.
    #[error("cannot derive a code list id from {path}")]
    MissingFileName { path: PathBuf },

    // === Format Errors ===
    /// Document is not valid JSON.
    #[error("failed to parse code list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Top-level JSON value is not an array.
    #[error("a code list document must be a JSON array of items")]
    NotAnArray,

    /// An item lacks one of the mandatory attributes.
    #[error(
        "item {index} is missing one of the following attributes for an option: value or label ({field})"
    )]
    MissingField { index: usize, field: &'static str },

    /// An item has the attributes but with unusable content.
    #[error("item {index} has an invalid format: {source}")]
    InvalidItem {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    // === Model Errors ===
    /// Error reported by the code list model (e.g. an invalid title).
    #[error(transparent)]
    Model(#[from] CodeListError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
