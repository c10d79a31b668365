//! Tree-walking evaluator over the whitelisted names.

use std::f64::consts;

use crate::core::error::{CalcError, Result};
use crate::core::ops;

use super::parser::{BinaryOp, Expr, UnaryOp};

/// Named functions callable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Log10,
    Log,
    Abs,
    Round,
    Sin,
    Cos,
    Tan,
    Exp,
    Floor,
    Ceil,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Function::Sqrt),
            "log10" => Some(Function::Log10),
            "log" => Some(Function::Log),
            "abs" => Some(Function::Abs),
            "round" => Some(Function::Round),
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "exp" => Some(Function::Exp),
            "floor" => Some(Function::Floor),
            "ceil" => Some(Function::Ceil),
            _ => None,
        }
    }

    /// Accepted argument counts as `(min, max, description)`.
    fn arity(self) -> (usize, usize, &'static str) {
        match self {
            Function::Log | Function::Round => (1, 2, "1 or 2"),
            _ => (1, 1, "1"),
        }
    }

    fn apply(self, args: &[f64]) -> Result<f64> {
        let x = args[0];
        match self {
            Function::Sqrt => ops::sqrt(x),
            Function::Log10 => ops::log10(x),
            Function::Log => match args.get(1) {
                Some(&base) => ops::log(x, base),
                None => ops::ln(x),
            },
            Function::Abs => Ok(ops::abs(x)),
            Function::Round => match args.get(1) {
                Some(&digits) => {
                    if digits.fract() != 0.0 || !digits.is_finite() {
                        return Err(CalcError::Domain(format!(
                            "round() digits must be an integer, got {digits}"
                        )));
                    }
                    Ok(ops::round_to(x, digits as i32))
                }
                None => Ok(ops::round_to(x, 0)),
            },
            Function::Sin => Ok(ops::sin(x)),
            Function::Cos => Ok(ops::cos(x)),
            Function::Tan => Ok(ops::tan(x)),
            Function::Exp => Ok(ops::exp(x)),
            Function::Floor => Ok(ops::floor(x)),
            Function::Ceil => Ok(ops::ceil(x)),
        }
    }
}

pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

/// Evaluates an expression tree. Operands are evaluated left to right and
/// the first error wins.
pub fn evaluate(expr: &Expr) -> Result<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Name { name, position } => constant(name).ok_or_else(|| CalcError::UnknownName {
            name: name.clone(),
            position: *position,
        }),
        Expr::Call {
            name,
            position,
            args,
        } => {
            let function = Function::from_name(name).ok_or_else(|| CalcError::UnknownName {
                name: name.clone(),
                position: *position,
            })?;
            let (min, max, expected) = function.arity();
            if args.len() < min || args.len() > max {
                return Err(CalcError::Arity {
                    name: name.clone(),
                    expected,
                    found: args.len(),
                });
            }
            let values = args.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
            function.apply(&values)
        }
        Expr::Unary { op, operand } => {
            let value = evaluate(operand)?;
            Ok(match op {
                UnaryOp::Neg => ops::negate(value),
                UnaryOp::Plus => value,
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let a = evaluate(lhs)?;
            let b = evaluate(rhs)?;
            match op {
                BinaryOp::Add => Ok(ops::add(a, b)),
                BinaryOp::Sub => Ok(ops::subtract(a, b)),
                BinaryOp::Mul => Ok(ops::multiply(a, b)),
                BinaryOp::Div => ops::divide(a, b),
                BinaryOp::Mod => ops::modulo(a, b),
                BinaryOp::Pow => ops::power(a, b),
            }
        }
    }
}
