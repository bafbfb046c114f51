//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal is too small to lay out the editor
    #[error("Terminal too small: need at least {min_width}x{min_height}")]
    TerminalTooSmall { min_width: u16, min_height: u16 },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
