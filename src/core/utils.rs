//! Small helpers shared by the calculator, the greeter and the REPL.

use unicode_width::UnicodeWidthStr;

use super::error::{CalcError, Result};
use super::ops;

/// Trims surrounding whitespace.
pub fn format_message(message: &str) -> String {
    message.trim().to_string()
}

/// Rejects blank strings. `label` names the argument in the error.
pub fn validate_name(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::Invalid(format!(
            "'{label}' must not be an empty string"
        )));
    }
    Ok(())
}

pub fn chunk_list<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size < 1 {
        return Err(CalcError::Invalid("chunk size must be at least 1".into()));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// Formats a number for display, rounded to `precision` decimal places.
/// Whole numbers keep a trailing `.0` so they still read as floats.
pub fn format_number(value: f64, precision: u32) -> String {
    // Past these bounds the scaled value would overflow and rounding is a no-op anyway.
    let rounded = if value.is_finite() && value.abs() < 1e15 && precision <= 15 {
        ops::round_to(value, precision as i32)
    } else {
        value
    };
    if rounded.is_finite() && rounded.fract() == 0.0 && rounded.abs() < 1e16 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Terminal column width of `text`.
pub fn display_width(text: &str) -> usize {
    text.width()
}
