//! Textbook integer and float helpers, independent of any calculator state.

use super::error::{CalcError, Result};
use super::ops;

pub fn add(a: f64, b: f64) -> f64 {
    ops::add(a, b)
}

pub fn subtract(a: f64, b: f64) -> f64 {
    ops::subtract(a, b)
}

pub fn multiply(a: f64, b: f64) -> f64 {
    ops::multiply(a, b)
}

pub fn divide(a: f64, b: f64) -> Result<f64> {
    ops::divide(a, b)
}

pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(CalcError::Invalid(
            "factorial is not defined for negative numbers".into(),
        ));
    }
    (1..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i)
            .ok_or_else(|| CalcError::Invalid(format!("factorial of {n} overflows u128")))
    })
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Length of the longest Fibonacci prefix that fits in a `u128`
/// (the last term is F(186)).
pub const MAX_FIBONACCI_TERMS: usize = 187;

/// The first `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
pub fn fibonacci(n: usize) -> Result<Vec<u128>> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(CalcError::Invalid(format!(
            "fibonacci term {MAX_FIBONACCI_TERMS} overflows u128 (asked for {n} terms)"
        )));
    }
    let mut seq: Vec<u128> = Vec::with_capacity(n);
    for i in 0..n {
        let next = match i {
            0 => 0,
            1 => 1,
            _ => seq[i - 1].checked_add(seq[i - 2]).ok_or_else(|| {
                CalcError::Invalid(format!("fibonacci term {i} overflows u128"))
            })?,
        };
        seq.push(next);
    }
    Ok(seq)
}
