//! # Calculator
//!
//! A stateful calculator: a current result, the history of every value the
//! result has held, and one memory slot.
//!
//! ```text
//! Calculator
//! ├── result: f64           // always == history.last()
//! ├── history: Vec<f64>     // seeded with the initial value, never empty
//! ├── memory: f64           // scratch slot, independent of history/undo
//! ├── precision: u32        // display rounding only
//! └── history_limit: Option<usize>
//! ```
//!
//! Operations chain by returning `&mut Self`. Infallible ones return it
//! directly; fallible ones return `Result<&mut Self>` so a chain reads
//! `calc.divide(4.0)?.add(1.0)`. A failed operation leaves result, history
//! and memory exactly as they were.
//!
//! ```
//! use abacus::core::calculator::Calculator;
//!
//! let mut calc = Calculator::new(10.0);
//! calc.multiply(3.0).subtract(5.0);
//! assert_eq!(calc.result(), 25.0);
//!
//! assert_eq!(Calculator::compute("sqrt(144) + 2**3").unwrap(), 20.0);
//! ```

use std::fmt;

use log::debug;

use super::error::{CalcError, Result};
use super::{expr, ops, utils};

/// Display precision (decimal places) used when none is configured.
pub const DEFAULT_PRECISION: u32 = 10;

/// Construction parameters. `Default` gives initial value 0.0, ten decimal
/// places of display precision and unbounded history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    pub initial: f64,
    pub precision: u32,
    /// Maximum number of history entries kept (at least 1). `None` = unbounded.
    pub history_limit: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial: 0.0,
            precision: DEFAULT_PRECISION,
            history_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    result: f64,
    history: Vec<f64>,
    memory: f64,
    precision: u32,
    history_limit: Option<usize>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_config(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(initial: f64) -> Self {
        Self::with_config(CalculatorConfig {
            initial,
            ..CalculatorConfig::default()
        })
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            result: config.initial,
            history: vec![config.initial],
            memory: 0.0,
            precision: config.precision,
            history_limit: config.history_limit.map(|n| n.max(1)),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of recorded steps after the seed entry.
    pub fn steps(&self) -> usize {
        self.history.len() - 1
    }

    /// The result rounded to the configured precision, formatted for display.
    pub fn display_result(&self) -> String {
        utils::format_number(self.result, self.precision)
    }

    // ── Private ─────────────────────────────────────────────────────────────

    /// The only place `result` and `history` change together.
    fn commit(&mut self, value: f64) -> &mut Self {
        self.result = value;
        self.history.push(value);
        if let Some(limit) = self.history_limit
            && self.history.len() > limit
        {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
        self
    }

    fn apply(&mut self, op: impl FnOnce(f64) -> f64) -> &mut Self {
        let value = op(self.result);
        self.commit(value)
    }

    fn try_apply(&mut self, op: impl FnOnce(f64) -> Result<f64>) -> Result<&mut Self> {
        let value = op(self.result)?;
        Ok(self.commit(value))
    }

    // ── Basic arithmetic ────────────────────────────────────────────────────

    pub fn add(&mut self, n: f64) -> &mut Self {
        self.apply(|x| ops::add(x, n))
    }

    pub fn subtract(&mut self, n: f64) -> &mut Self {
        self.apply(|x| ops::subtract(x, n))
    }

    pub fn multiply(&mut self, n: f64) -> &mut Self {
        self.apply(|x| ops::multiply(x, n))
    }

    pub fn divide(&mut self, n: f64) -> Result<&mut Self> {
        self.try_apply(|x| ops::divide(x, n))
    }

    /// Floored remainder; takes the sign of `n`.
    pub fn modulo(&mut self, n: f64) -> Result<&mut Self> {
        self.try_apply(|x| ops::modulo(x, n))
    }

    pub fn power(&mut self, exp: f64) -> Result<&mut Self> {
        self.try_apply(|x| ops::power(x, exp))
    }

    pub fn negate(&mut self) -> &mut Self {
        self.apply(ops::negate)
    }

    pub fn abs(&mut self) -> &mut Self {
        self.apply(ops::abs)
    }

    // ── Scientific ──────────────────────────────────────────────────────────

    pub fn sqrt(&mut self) -> Result<&mut Self> {
        self.try_apply(ops::sqrt)
    }

    /// Natural logarithm.
    pub fn ln(&mut self) -> Result<&mut Self> {
        self.try_apply(ops::ln)
    }

    pub fn log(&mut self, base: f64) -> Result<&mut Self> {
        self.try_apply(|x| ops::log(x, base))
    }

    pub fn log10(&mut self) -> Result<&mut Self> {
        self.try_apply(ops::log10)
    }

    /// Radians.
    pub fn sin(&mut self) -> &mut Self {
        self.apply(ops::sin)
    }

    pub fn cos(&mut self) -> &mut Self {
        self.apply(ops::cos)
    }

    pub fn tan(&mut self) -> &mut Self {
        self.apply(ops::tan)
    }

    pub fn exp(&mut self) -> &mut Self {
        self.apply(ops::exp)
    }

    pub fn floor(&mut self) -> &mut Self {
        self.apply(ops::floor)
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.apply(ops::ceil)
    }

    /// Rounds to `decimals` places, ties to even.
    pub fn round_to(&mut self, decimals: i32) -> &mut Self {
        self.apply(|x| ops::round_to(x, decimals))
    }

    pub fn percent(&mut self) -> &mut Self {
        self.apply(ops::percent)
    }

    // ── Memory ──────────────────────────────────────────────────────────────

    pub fn mem_store(&mut self) -> &mut Self {
        self.memory = self.result;
        self
    }

    /// Loads memory into the result. Counts as a step.
    pub fn mem_recall(&mut self) -> &mut Self {
        self.commit(self.memory)
    }

    pub fn mem_add(&mut self) -> &mut Self {
        self.memory += self.result;
        self
    }

    pub fn mem_clear(&mut self) -> &mut Self {
        self.memory = 0.0;
        self
    }

    // ── History & reset ─────────────────────────────────────────────────────

    /// Drops the latest history entry and restores the one before it.
    ///
    /// Fails with [`CalcError::Undo`] when only the seed entry is left; the
    /// calculator is unchanged in that case.
    pub fn undo(&mut self) -> Result<&mut Self> {
        if self.history.len() < 2 {
            return Err(CalcError::Undo);
        }
        self.history.pop();
        self.result = self.history[self.history.len() - 1];
        debug!("undo -> {} ({} steps left)", self.result, self.steps());
        Ok(self)
    }

    /// Resets to 0.0 with a fresh history. Memory is kept.
    pub fn reset(&mut self) -> &mut Self {
        self.reset_to(0.0)
    }

    pub fn reset_to(&mut self, value: f64) -> &mut Self {
        debug!("reset to {value}");
        self.result = value;
        self.history.clear();
        self.history.push(value);
        self
    }

    /// Forgets every step but keeps the current result as the new seed.
    pub fn clear_history(&mut self) -> &mut Self {
        self.history.clear();
        self.history.push(self.result);
        self
    }

    // ── Expressions ─────────────────────────────────────────────────────────

    /// Evaluates `expression` and, on success, records the value as a step.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64> {
        let value = Self::compute(expression)?;
        self.commit(value);
        Ok(value)
    }

    /// Evaluates `expression` without touching any calculator.
    pub fn compute(expression: &str) -> Result<f64> {
        expr::evaluate(expression)
    }

    // ── Report ──────────────────────────────────────────────────────────────

    pub fn summary(&self) -> String {
        const INNER: usize = 29;
        let row = |label: &str, value: String| {
            let text = format!("  {label:<8}: {value}");
            let pad = INNER.saturating_sub(utils::display_width(&text));
            format!("│{text}{}│", " ".repeat(pad))
        };
        [
            format!("┌{}┐", "─".repeat(INNER)),
            row("Result", self.display_result()),
            row("Memory", utils::format_number(self.memory, self.precision)),
            row("Steps", self.steps().to_string()),
            format!("└{}┘", "─".repeat(INNER)),
        ]
        .join("\n")
    }
}

// ── Static helpers ──────────────────────────────────────────────────────────

/// Roots of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    Real(f64, f64),
    /// The conjugate pair `re ± im·i`.
    Complex { re: f64, im: f64 },
}

impl Calculator {
    pub fn gcd(a: i64, b: i64) -> u64 {
        let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    /// Least common multiple of `|a|` and `|b|`, 0 when either is 0. Widened
    /// to `u128` so `|a·b|` never overflows.
    pub fn lcm(a: i64, b: i64) -> u128 {
        let g = Self::gcd(a, b);
        if g == 0 {
            return 0;
        }
        u128::from(a.unsigned_abs() / g) * u128::from(b.unsigned_abs())
    }

    /// Bounds `value` to `[lo, hi]`; `lo` wins when the bounds cross.
    pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
        lo.max(hi.min(value))
    }

    pub fn percentage_of(part: f64, whole: f64) -> Result<f64> {
        if whole == 0.0 {
            return Err(CalcError::Division("whole cannot be zero".into()));
        }
        Ok(part / whole * 100.0)
    }

    pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Roots> {
        if a == 0.0 {
            return Err(CalcError::Invalid(
                "leading coefficient must be non-zero".into(),
            ));
        }
        let discriminant = b * b - 4.0 * a * c;
        if discriminant >= 0.0 {
            let root = discriminant.sqrt();
            Ok(Roots::Real((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)))
        } else {
            Ok(Roots::Complex {
                re: -b / (2.0 * a),
                im: (-discriminant).sqrt() / (2.0 * a),
            })
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculator(result={}, steps={})",
            self.display_result(),
            self.steps()
        )
    }
}

impl From<&Calculator> for f64 {
    fn from(calc: &Calculator) -> Self {
        calc.result
    }
}

impl PartialEq<f64> for Calculator {
    fn eq(&self, other: &f64) -> bool {
        self.result == *other
    }
}
