//! # Operation Set
//!
//! The numeric operations shared by [`Calculator`](super::calculator::Calculator)
//! chaining methods and the expression evaluator. Each operation is a plain
//! function over `f64`; the fallible ones check their domain up front so
//! callers never observe a half-applied result.

use super::error::{CalcError, Result};

// ── Arithmetic ──────────────────────────────────────────────────────────────

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::Division("division by zero is undefined".into()));
    }
    Ok(a / b)
}

/// Floored modulo: the remainder takes the sign of the divisor.
pub fn modulo(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::Division("modulo by zero is undefined".into()));
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

// ── Power ───────────────────────────────────────────────────────────────────

pub fn power(base: f64, exp: f64) -> Result<f64> {
    if base == 0.0 && exp < 0.0 {
        return Err(CalcError::Division(
            "zero cannot be raised to a negative power".into(),
        ));
    }
    let value = base.powf(exp);
    if value.is_nan() && !base.is_nan() && !exp.is_nan() {
        return Err(CalcError::Domain(format!(
            "{base} ** {exp} has no real result"
        )));
    }
    Ok(value)
}

// ── Scientific ──────────────────────────────────────────────────────────────

pub fn sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(CalcError::Domain(format!(
            "cannot take sqrt of negative number {x}"
        )));
    }
    Ok(x.sqrt())
}

/// Natural logarithm.
pub fn ln(x: f64) -> Result<f64> {
    check_log_input(x)?;
    Ok(x.ln())
}

pub fn log10(x: f64) -> Result<f64> {
    check_log_input(x)?;
    Ok(x.log10())
}

/// Logarithm in an arbitrary base.
pub fn log(x: f64, base: f64) -> Result<f64> {
    check_log_input(x)?;
    if base <= 0.0 || base == 1.0 {
        return Err(CalcError::Domain(format!("invalid logarithm base {base}")));
    }
    if base == 10.0 {
        return Ok(x.log10());
    }
    if base == 2.0 {
        return Ok(x.log2());
    }
    if base == std::f64::consts::E {
        return Ok(x.ln());
    }
    Ok(x.ln() / base.ln())
}

fn check_log_input(x: f64) -> Result<()> {
    if x <= 0.0 {
        return Err(CalcError::Domain(
            "logarithm undefined for non-positive values".into(),
        ));
    }
    Ok(())
}

pub fn negate(x: f64) -> f64 {
    -x
}

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn tan(x: f64) -> f64 {
    x.tan()
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Rounds to `decimals` places, ties to even. Negative `decimals` round
/// to tens, hundreds and so on.
///
/// Non-finite values, and values with no digits past the requested place,
/// come back unchanged. A place beyond the value's magnitude rounds to a
/// zero of the same sign.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    match decimals {
        0 => x.round_ties_even(),
        1.. => {
            let factor = 10f64.powi(decimals);
            let scaled = x * factor;
            // Past 2^52 every f64 is already a whole number.
            if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
                return x;
            }
            scaled.round_ties_even() / factor
        }
        _ => {
            let factor = 10f64.powi(decimals.saturating_neg());
            if !factor.is_finite() {
                return 0.0f64.copysign(x);
            }
            (x / factor).round_ties_even() * factor
        }
    }
}

pub fn percent(x: f64) -> f64 {
    x / 100.0
}
