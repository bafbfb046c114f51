//! User interface layer
//!
//! [`output`] writes command results for the CLI; [`ratatui_adapter`] is the
//! interactive terminal front end for the formula editor.

pub mod error;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::FormulaApp;
