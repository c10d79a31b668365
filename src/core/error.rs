//! # Calculator Errors
//!
//! Every fallible operation in the core returns [`CalcError`]. Errors are
//! local to the failing call: a failed operation never changes a
//! calculator's result, history, or memory.

use std::fmt;

/// Errors produced by calculator operations and expression evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Malformed expression. `position` is the byte offset of the offending token.
    Parse { position: usize, message: String },
    /// Identifier that is not a whitelisted function or constant.
    UnknownName { name: String, position: usize },
    /// Function called with the wrong number of arguments.
    Arity {
        name: String,
        expected: &'static str,
        found: usize,
    },
    /// Division (or modulo) by zero.
    Division(String),
    /// Input outside an operation's domain (sqrt of a negative, log of zero, ...).
    Domain(String),
    /// Undo requested with only the seed entry left in history.
    Undo,
    /// Argument rejected by a helper (blank name, zero chunk size, ...).
    Invalid(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Parse { position, message } => {
                write!(f, "parse error at position {position}: {message}")
            }
            CalcError::UnknownName { name, position } => {
                write!(f, "name error: unknown name '{name}' at position {position}")
            }
            CalcError::Arity {
                name,
                expected,
                found,
            } => write!(
                f,
                "argument error: {name}() takes {expected} argument(s), got {found}"
            ),
            CalcError::Division(msg) => write!(f, "division error: {msg}"),
            CalcError::Domain(msg) => write!(f, "domain error: {msg}"),
            CalcError::Undo => write!(f, "undo error: nothing to undo"),
            CalcError::Invalid(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CalcError {}

pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        CalcError::Parse {
            position,
            message: message.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CalcError::Parse { .. })
    }

    pub fn is_division(&self) -> bool {
        matches!(self, CalcError::Division(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, CalcError::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_unknown_identifier() {
        let err = CalcError::UnknownName {
            name: "foo".into(),
            position: 0,
        };
        assert!(err.to_string().contains("'foo'"));
    }

    #[test]
    fn test_display_parse_includes_position() {
        let err = CalcError::parse(4, "unexpected ')'");
        assert_eq!(err.to_string(), "parse error at position 4: unexpected ')'");
    }

    #[test]
    fn test_undo_message() {
        assert!(CalcError::Undo.to_string().contains("nothing to undo"));
    }
}
