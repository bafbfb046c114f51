//! Evaluation error types
//!
//! Every variant describes a malformed expression: the joined tag text could
//! not be parsed, or it parsed but has no finite value.

use thiserror::Error;

/// Errors raised while parsing or evaluating an expression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Expression is empty")]
    Empty,

    /// A character that is not part of the arithmetic grammar
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnknownCharacter { ch: char, pos: usize },

    /// A numeric literal that does not parse as a number
    #[error("Invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    /// A token appeared where the grammar does not allow it
    #[error("Unexpected '{token}' at position {pos}")]
    UnexpectedToken { token: String, pos: usize },

    /// Input ended while an operand was still expected
    #[error("Unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    /// Groups, signs or exponents nested past the parser's limit
    #[error("Expression is nested too deeply at position {pos}")]
    TooDeep { pos: usize },

    /// A parenthesis without its partner
    #[error("Unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    /// Right-hand side of a division evaluated to zero
    #[error("Division by zero")]
    DivisionByZero,

    /// The result overflowed or is not a number
    #[error("Result is not a finite number ({0})")]
    NonFinite(f64),
}

/// Result type for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
