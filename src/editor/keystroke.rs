//! Keystroke classification
//!
//! The host reports the full updated value of the text field after each
//! keystroke. Only the last character of that value decides what happens:
//! an operand symbol is committed as its own tag, anything else simply
//! becomes the new free text.

use crate::catalog::Operand;

/// What a change of the text field means for the tag sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// Keep the full value as free text
    Append(String),
    /// Commit the operand as a tag and clear the free text
    CommitOperand(Operand),
}

/// Classify the updated text field value
#[must_use]
pub fn classify_keystroke(new_text: &str) -> Keystroke {
    match new_text.chars().next_back().and_then(Operand::from_char) {
        Some(op) => Keystroke::CommitOperand(op),
        None => Keystroke::Append(new_text.to_string()),
    }
}
