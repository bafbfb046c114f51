//! Tagcalc - a formula builder over named quantities
//!
//! A formula is an ordered sequence of tags. Each tag is either a named
//! quantity from the suggestion catalog (a label bound to a decimal number)
//! or one of the arithmetic operand symbols `+ - * / ( ) ^`. The editor
//! composes that sequence from keystrokes, the suggestion filter ranks the
//! catalog against the text typed so far, and the evaluator turns the tags
//! into a numeric total.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod editor;
pub mod eval;
pub mod suggest;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagcalcError {
    /// Invalid catalog entry or unknown tag
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Malformed expression
    #[error("Invalid expression: {0}")]
    Eval(#[from] eval::EvalError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
