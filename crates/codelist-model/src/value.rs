//! Scalar code values.
//!
//! A code value is the machine-readable part of a code list item. Stored
//! lists carry plain JSON scalars, so a value is one of string, number or
//! boolean. While a list is being edited the values may be mixed; after
//! normalization every value in a list shares one variant.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single code value.
///
/// Equality is strict: values of different variants never compare equal,
/// `-0` equals `0`, and `NaN` equals nothing (not even itself).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CodeValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl CodeValue {
    /// The empty string value used for freshly added items.
    pub fn empty() -> Self {
        Self::Str(String::new())
    }

    /// Returns true for the empty string value.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }

    /// Text form of the value, as a form field would show it.
    ///
    /// Integral numbers are printed without a fraction, `-0` prints as `0`,
    /// magnitudes from `1e21` up or below `1e-6` use exponent form (`1e+21`),
    /// and the non-finite numbers print as `NaN`, `Infinity` and `-Infinity`.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl Default for CodeValue {
    fn default() -> Self {
        Self::empty()
    }
}

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl Serialize for CodeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Bool(b) => serializer.serialize_bool(*b),
            // Integral numbers are written without a fraction: 42, not 42.0
            Self::Num(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Num(n) => serializer.serialize_f64(*n),
        }
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Num(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for CodeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for CodeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for CodeValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<bool> for CodeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return format_exponent(n);
    }
    n.to_string()
}

/// Shortest exponent form with an explicit exponent sign: `1e+21`, `1.5e-7`.
fn format_exponent(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => format!("{mantissa}e{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => text,
    }
}
