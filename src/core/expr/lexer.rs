//! Tokenizer for arithmetic expressions.
//!
//! Produces a flat token list terminated by [`TokenKind::Eof`]. Positions
//! are byte offsets into the source string.

use std::fmt;

use crate::core::error::{CalcError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    LParen,
    RParen,
    Comma,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Ident(name) => write!(f, "'{name}'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::StarStar => write!(f, "'**'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        let start = pos;
        let kind = match b {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
                continue;
            }
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 1;
                TokenKind::StarStar
            }
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'%' => TokenKind::Percent,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b'0'..=b'9' | b'.' => {
                let (value, end) = lex_number(source, pos)?;
                tokens.push(Token {
                    kind: TokenKind::Number(value),
                    position: start,
                });
                pos = end;
                continue;
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                let end = scan_while(bytes, pos, |c| c.is_ascii_alphanumeric() || c == b'_');
                tokens.push(Token {
                    kind: TokenKind::Ident(source[pos..end].to_string()),
                    position: start,
                });
                pos = end;
                continue;
            }
            _ => {
                let ch = source[pos..].chars().next().unwrap_or('?');
                return Err(CalcError::parse(pos, format!("unexpected character '{ch}'")));
            }
        };
        tokens.push(Token {
            kind,
            position: start,
        });
        pos += 1;
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        position: bytes.len(),
    });
    Ok(tokens)
}

fn scan_while(bytes: &[u8], mut pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    while pos < bytes.len() && pred(bytes[pos]) {
        pos += 1;
    }
    pos
}

/// Lexes `digits [. digits] [(e|E) [+|-] digits]` or `. digits ...`.
fn lex_number(source: &str, start: usize) -> Result<(f64, usize)> {
    let bytes = source.as_bytes();
    let mut pos = scan_while(bytes, start, |c| c.is_ascii_digit());
    let int_digits = pos - start;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        pos = scan_while(bytes, frac_start, |c| c.is_ascii_digit());
        frac_digits = pos - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return Err(CalcError::parse(start, "expected digits"));
    }

    // Exponent only when digits follow; otherwise `e` is left for the identifier lexer.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        if bytes.get(exp_pos).is_some_and(u8::is_ascii_digit) {
            pos = scan_while(bytes, exp_pos, |c| c.is_ascii_digit());
        }
    }

    let text = &source[start..pos];
    text.parse::<f64>()
        .map(|value| (value, pos))
        .map_err(|_| CalcError::parse(start, format!("invalid number '{text}'")))
}
