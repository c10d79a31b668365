//! Precedence-climbing parser.
//!
//! ```text
//! expr    := binary(1)
//! binary  := unary (op binary)*        ; climbing on precedence
//! unary   := ('-' | '+') unary | primary
//! primary := NUMBER | IDENT | IDENT '(' args ')' | '(' expr ')'
//! ```
//!
//! | operator      | precedence | associativity |
//! |---------------|------------|---------------|
//! | `+ -`         | 1          | left          |
//! | `* / %`       | 2          | left          |
//! | `**`          | 3          | right         |
//!
//! Unary signs bind tighter than every binary operator, so `-2 ** 2` is `4`.

use crate::core::error::{CalcError, Result};

use super::lexer::{Token, TokenKind};

/// Nesting cap for parentheses, unary chains, call arguments and `**` chains.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Cap on binary operators in one expression; bounds the evaluator's recursion.
pub const MAX_OPERATORS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::StarStar => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 2,
            BinaryOp::Pow => 3,
        }
    }

    fn is_right_assoc(self) -> bool {
        self == BinaryOp::Pow
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Name {
        name: String,
        position: usize,
    },
    Call {
        name: String,
        position: usize,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    operators: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            operators: 0,
        }
    }

    /// Parses the whole token stream into a single expression.
    pub fn parse(mut self) -> Result<Expr> {
        if self.peek().kind == TokenKind::Eof {
            return Err(CalcError::parse(self.peek().position, "empty expression"));
        }
        let expr = self.parse_binary(1)?;
        let next = self.peek();
        if next.kind != TokenKind::Eof {
            return Err(CalcError::parse(
                next.position,
                format!("unexpected {}", next.kind),
            ));
        }
        Ok(expr)
    }

    fn peek(&self) -> &Token {
        // tokenize() always terminates the stream with Eof and we never advance past it
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.advance();
        if token.kind != kind {
            return Err(CalcError::parse(
                token.position,
                format!("expected {kind}, found {}", token.kind),
            ));
        }
        Ok(token)
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(CalcError::parse(
                position,
                format!("expression nested deeper than {MAX_NESTING_DEPTH} levels"),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = BinaryOp::from_token(&self.peek().kind) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            let token = self.advance();
            self.operators += 1;
            if self.operators > MAX_OPERATORS {
                return Err(CalcError::parse(
                    token.position,
                    format!("more than {MAX_OPERATORS} operators"),
                ));
            }
            let rhs = if op.is_right_assoc() {
                self.enter(token.position)?;
                let rhs = self.parse_binary(precedence)?;
                self.leave();
                rhs
            } else {
                self.parse_binary(precedence + 1)?
            };
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.peek().kind {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        let Some(op) = op else {
            return self.parse_primary();
        };
        let token = self.advance();
        self.enter(token.position)?;
        let operand = self.parse_unary()?;
        self.leave();
        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Ident(name) => {
                if self.peek().kind == TokenKind::LParen {
                    self.advance();
                    let args = self.parse_args(token.position)?;
                    Ok(Expr::Call {
                        name,
                        position: token.position,
                        args,
                    })
                } else {
                    Ok(Expr::Name {
                        name,
                        position: token.position,
                    })
                }
            }
            TokenKind::LParen => {
                self.enter(token.position)?;
                let inner = self.parse_binary(1)?;
                self.leave();
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            other => Err(CalcError::parse(
                token.position,
                format!("unexpected {other}"),
            )),
        }
    }

    /// Parses `arg (, arg)* )` after the opening parenthesis has been consumed.
    fn parse_args(&mut self, call_position: usize) -> Result<Vec<Expr>> {
        self.enter(call_position)?;
        let mut args = Vec::new();
        if self.peek().kind != TokenKind::RParen {
            loop {
                args.push(self.parse_binary(1)?);
                if self.peek().kind == TokenKind::Comma {
                    self.advance();
                    continue;
                }
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        self.leave();
        Ok(args)
    }
}
