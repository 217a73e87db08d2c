//! Number parsing with form-field semantics.
//!
//! Code list values typed into the editor are converted the same way a
//! browser form converts a string to a number:
//! - Surrounding whitespace is ignored: `"  42 "` -> `42`
//! - An empty (or blank) string is zero: `""` -> `0`
//! - Decimal literals with optional sign and exponent: `"-1.5e3"`, `".5"`, `"5."`
//! - Unsigned radix literals: `"0x1F"`, `"0o17"`, `"0b101"`
//! - Exactly `Infinity`, `+Infinity` and `-Infinity`
//!
//! Anything else is `NaN`, including Rust-only spellings such as `inf` or `nan`.

use codelist_model::CodeValue;

/// Convert a string to a number, returning `NaN` when it is not numeric.
pub fn js_number(value: &str) -> f64 {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(number) = parse_radix_literal(trimmed) {
        return number;
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Numeric form of a code value.
///
/// Booleans convert to `1` and `0`, numbers are returned unchanged.
pub fn to_number(value: &CodeValue) -> f64 {
    match value {
        CodeValue::Num(n) => *n,
        CodeValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        CodeValue::Str(s) => js_number(s),
    }
}

/// Parse `0x`, `0o` and `0b` literals. Returns `None` when there is no radix prefix.
fn parse_radix_literal(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &value[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut number = 0.0f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        number = number * f64::from(radix) + f64::from(digit);
    }
    Some(number)
}

/// Only digits, sign, decimal point and exponent markers may appear.
fn is_decimal_literal(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}
