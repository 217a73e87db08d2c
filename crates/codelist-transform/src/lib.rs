//! Value-type inference and coercion for code lists.
//!
//! Inference and coercion together form one normalization step:
//! [`update_code_list_value_type`] infers the type of a list and rewrites
//! every value to it.

pub mod coercion;
pub mod inference;
pub mod numeric;

pub use coercion::{coerce, coerce_value, coerce_with_policy, update_code_list_value_type};
pub use inference::{fits_boolean, fits_number, fits_type, infer_value_type};
pub use numeric::{js_number, to_number};
