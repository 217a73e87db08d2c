pub mod error;
pub mod item;
pub mod options;
pub mod text;
pub mod value;
pub mod value_error;
pub mod value_type;

pub use error::{CodeListError, Result};
pub use item::{CodeList, CodeListItem, TextProperty};
pub use options::{CoercionPolicy, DEFAULT_FALLBACK_LANGUAGE, EditorOptions};
pub use text::{LocalizedText, TextValue};
pub use value::CodeValue;
pub use value_error::{ValueError, ValueErrorMap};
pub use value_type::{ValueType, value_type_label};
