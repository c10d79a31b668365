//! Abacus library exports

pub mod core;
pub mod repl;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{CalcError, Calculator, CalculatorConfig};
