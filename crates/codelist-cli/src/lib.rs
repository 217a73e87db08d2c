//! CLI library components for the code list tool.

pub mod logging;
pub mod summary;
