//! Core record types shared by the catalog and the editor
//!
//! A [`Tag`] is both a catalog suggestion and a committed unit of the
//! expression; the two are structurally identical and interchangeable.

use super::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;

/// One of the seven recognized operand symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    Add,
    Subtract,
    Multiply,
    Divide,
    OpenParen,
    CloseParen,
    Power,
}

impl Operand {
    /// Every operand, in the order they are listed to users
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::OpenParen,
        Self::CloseParen,
        Self::Power,
    ];

    /// Map a character to its operand, if it is one
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Parse a string consisting of exactly one operand symbol
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// The operand's symbol character
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Power => '^',
        }
    }

    /// The operand's symbol as a string slice
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Power => "^",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Check whether `value` is a plain decimal numeral (`12`, `0.5`, `.5`, `3.`)
#[must_use]
pub fn is_decimal_numeral(value: &str) -> bool {
    let (int_part, frac_part) = value.split_once('.').unwrap_or((value, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    !(int_part.is_empty() && frac_part.is_empty()) && all_digits(int_part) && all_digits(frac_part)
}

/// A named quantity or an operand symbol
///
/// `key` is the display label, `value` the literal placed into the
/// expression. For raw operand tags `key == value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    /// Create a tag, checking the value invariant
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidValue` if `value` is neither a decimal
    /// numeral nor exactly one operand symbol.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let value = value.into();
        if is_decimal_numeral(&value) || Operand::from_symbol(&value).is_some() {
            Ok(Self { key, value })
        } else {
            Err(CatalogError::InvalidValue { key, value })
        }
    }

    /// Create the raw tag for an operand typed directly
    #[must_use]
    pub fn operand(op: Operand) -> Self {
        Self {
            key: op.symbol().to_string(),
            value: op.symbol().to_string(),
        }
    }

    /// Display label
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Literal or symbol placed into the expression
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the label itself is an operand symbol.
    ///
    /// These render as plain symbols without a delete control. A named alias
    /// such as `SUM` is not an operand label even though its value is `+`.
    #[must_use]
    pub fn is_operand_label(&self) -> bool {
        Operand::from_symbol(&self.key).is_some()
    }
}

impl TryFrom<(&str, &str)> for Tag {
    type Error = CatalogError;

    fn try_from((key, value): (&str, &str)) -> Result<Self> {
        Self::new(key, value)
    }
}

impl From<Operand> for Tag {
    fn from(op: Operand) -> Self {
        Self::operand(op)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}
