//! Tokenizer for infix arithmetic

use super::error::{EvalError, Result};
use crate::catalog::Operand;
use std::fmt;

/// A lexical token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Op(Operand),
}

/// A token with its byte offset in the source text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Split `input` into tokens, skipping whitespace
///
/// Numbers are decimal literals with an optional fraction (`12`, `1.5`,
/// `.5`) and an optional exponent (`1e3`, `2.5E-4`).
///
/// # Errors
/// Returns `EvalError::UnknownCharacter` for characters outside the grammar
/// and `EvalError::InvalidNumber` for malformed literals such as `1.2.3`.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if let Some(op) = Operand::from_char(c) {
            chars.next();
            tokens.push(Token {
                kind: TokenKind::Op(op),
                pos,
            });
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = pos;
            let mut prev = c;
            while let Some(&(i, d)) = chars.peek() {
                let exponent_sign = matches!(d, '+' | '-') && matches!(prev, 'e' | 'E');
                if d.is_ascii_digit() || d == '.' || matches!(d, 'e' | 'E') || exponent_sign {
                    end = i + d.len_utf8();
                    prev = d;
                    chars.next();
                } else {
                    break;
                }
            }
            let text = &input[pos..end];
            let value = text.parse::<f64>().map_err(|_| EvalError::InvalidNumber {
                text: text.to_string(),
                pos,
            })?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                pos,
            });
            continue;
        }

        return Err(EvalError::UnknownCharacter { ch: c, pos });
    }

    Ok(tokens)
}
