//! Command implementations
//!
//! Each command is a module with an `execute` function that takes the parsed
//! CLI arguments and reports through an [`OutputWriter`](crate::ui::OutputWriter).

pub mod calc;
pub mod catalog;
pub mod config;
pub mod edit;
pub mod eval;
