//! Expression evaluation
//!
//! Turns an ordered sequence of tags into a numeric total. The tag values are
//! joined with single spaces into the canonical expression text, which is
//! then tokenized, parsed and evaluated with `f64` semantics.
//!
//! # Policy for undefined results
//!
//! Division by zero is rejected with [`EvalError::DivisionByZero`], and any
//! intermediate value that overflows to infinity or becomes NaN (for example
//! `10 ^ 400` or `(-8) ^ 0.5`) is rejected with [`EvalError::NonFinite`].
//! Parentheses, signs and exponents may nest at most [`parser::MAX_DEPTH`]
//! levels; deeper input fails with [`EvalError::TooDeep`] instead of
//! exhausting the stack.
//!
//! # Examples
//!
//! ```
//! use tagcalc::catalog::{Operand, Tag};
//! use tagcalc::eval;
//!
//! let tags = vec![
//!     Tag::new("A", "2").unwrap(),
//!     Tag::operand(Operand::Add),
//!     Tag::new("B", "3").unwrap(),
//! ];
//! let result = eval::calculate(&tags).unwrap();
//! assert_eq!(result.expression_text, "2 + 3");
//! assert_eq!(result.total, 5.0);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::EvalError;
pub use parser::{BinaryOp, Expr};

use crate::catalog::Tag;
use error::Result;
use serde::Serialize;

/// Outcome of a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Tag values joined by single spaces
    pub expression_text: String,
    /// Numeric value of the expression
    pub total: f64,
}

/// Join tag values into the canonical expression text
#[must_use]
pub fn expression_text(tags: &[Tag]) -> String {
    tags.iter().map(Tag::value).collect::<Vec<_>>().join(" ")
}

/// Evaluate infix arithmetic text
///
/// # Errors
/// Returns `EvalError` if the text is empty, malformed, divides by zero, or
/// produces a non-finite value.
pub fn evaluate(text: &str) -> Result<f64> {
    let tokens = lexer::tokenize(text)?;
    parser::parse(&tokens)?.evaluate()
}

/// Join the tags and evaluate the resulting expression
///
/// # Errors
/// Returns `EvalError` if the joined expression cannot be evaluated.
pub fn calculate(tags: &[Tag]) -> Result<Evaluation> {
    let expression_text = expression_text(tags);
    let total = evaluate(&expression_text)?;
    Ok(Evaluation {
        expression_text,
        total,
    })
}

/// The calculate boundary of the widget
///
/// Holds the displayed expression text and total. Both are only updated
/// by [`Calculator::calculate`]; a failed calculation still shows the text
/// that was attempted but leaves the previous total in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    expression_text: String,
    total: f64,
    valid: bool,
}

impl Calculator {
    /// Create a calculator showing an empty expression and a zero total
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expression text from the most recent calculation attempt
    #[must_use]
    pub fn expression_text(&self) -> &str {
        &self.expression_text
    }

    /// Total from the most recent successful calculation
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// True if the total was computed from the current expression text
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Calculate `tags`, updating the displayed text and, on success, the total
    ///
    /// # Errors
    /// Returns the `EvalError` so the caller can show a blocking notice. The
    /// failure is also logged with its diagnostic message.
    pub fn calculate(&mut self, tags: &[Tag]) -> Result<Evaluation> {
        self.expression_text = expression_text(tags);
        self.valid = false;

        match evaluate(&self.expression_text) {
            Ok(total) => {
                self.total = total;
                self.valid = true;
                log::debug!("calculated '{}' = {total}", self.expression_text);
                Ok(Evaluation {
                    expression_text: self.expression_text.clone(),
                    total,
                })
            }
            Err(e) => {
                log::warn!("invalid expression '{}': {e}", self.expression_text);
                Err(e)
            }
        }
    }
}
