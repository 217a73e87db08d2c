//! Code list ingestion utilities.
//!
//! Reads and writes the JSON documents code lists are stored as, and
//! validates uploaded files before they are accepted.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use codelist_ingest::{read_upload, write_code_list};
//!
//! let upload = read_upload(Path::new("countries.json"))?;
//! write_code_list(Path::new("out/countries.json"), &upload.code_list)?;
//! ```

mod document;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Documents ===
pub use document::{
    CodeListUpload, parse_code_list, read_code_list, read_upload, to_json_string,
    write_code_list,
};
