//! # Expression Evaluation
//!
//! A closed recursive-descent evaluator for arithmetic strings. Nothing in
//! the input can reach anything but the grammar below and a fixed set of
//! names; there is no general-purpose evaluation behind it.
//!
//! ```text
//!   "sqrt(144) + 2**3"
//!          │
//!          ▼
//!   lexer::tokenize  ──►  parser::Parser  ──►  eval::evaluate  ──►  20.0
//!      (tokens)             (Expr tree)          (ops::*)
//! ```
//!
//! - Operators: `+ - * / % **` and parentheses
//! - Functions: `sqrt`, `log10`, `log(x[, base])`, `abs`, `round(x[, n])`,
//!   `sin`, `cos`, `tan`, `exp`, `floor`, `ceil`
//! - Constants: `pi`, `e`
//!
//! Every call builds its own tokens and tree, so independent evaluations
//! share no state.

pub mod eval;
pub mod lexer;
pub mod parser;

use log::debug;

use crate::core::error::Result;

pub use parser::{MAX_NESTING_DEPTH, MAX_OPERATORS};

/// Parses and evaluates `source`.
pub fn evaluate(source: &str) -> Result<f64> {
    let tokens = lexer::tokenize(source)?;
    let tree = parser::Parser::new(tokens).parse()?;
    let value = eval::evaluate(&tree)?;
    debug!("evaluated {source:?} = {value}");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CalcError;
    use crate::test_support::assert_close;

    #[test]
    fn test_precedence_and_functions() {
        assert_eq!(evaluate("sqrt(144) + 2**3").unwrap(), 20.0);
        assert_eq!(evaluate("(3 + 4) * 2").unwrap(), 14.0);
        assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), 512.0);
        assert_eq!(evaluate("100 / 4").unwrap(), 25.0);
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate("17 % 5").unwrap(), 2.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-2 ** 2").unwrap(), 4.0);
        assert_eq!(evaluate("2 ** -1").unwrap(), 0.5);
        assert_eq!(evaluate("3 - -2").unwrap(), 5.0);
        assert_eq!(evaluate("--4").unwrap(), 4.0);
        assert_eq!(evaluate("-(1 + 2) * 2").unwrap(), -6.0);
    }

    #[test]
    fn test_constants_and_two_arg_functions() {
        assert_close(evaluate("pi * 2").unwrap(), 2.0 * std::f64::consts::PI);
        assert_close(evaluate("log(e)").unwrap(), 1.0);
        assert_eq!(evaluate("log(8, 2)").unwrap(), 3.0);
        assert_eq!(evaluate("round(3.14159, 2)").unwrap(), 3.14);
        assert_eq!(evaluate("log10(1000)").unwrap(), 3.0);
    }

    #[test]
    fn test_error_kinds() {
        assert!(evaluate("1/0").unwrap_err().is_division());
        assert!(evaluate("sqrt(-4)").unwrap_err().is_domain());
        assert!(evaluate("log10(0)").unwrap_err().is_domain());
        assert!(evaluate("2 +").unwrap_err().is_parse());
        assert!(evaluate("import os").unwrap_err().is_parse());
        assert_eq!(
            evaluate("foo(1)").unwrap_err(),
            CalcError::UnknownName {
                name: "foo".into(),
                position: 0
            }
        );
        assert_eq!(
            evaluate("2 * x").unwrap_err(),
            CalcError::UnknownName {
                name: "x".into(),
                position: 4
            }
        );
    }
}
