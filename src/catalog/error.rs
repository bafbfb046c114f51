//! Catalog-specific error types
//!
//! Raised when a tag or catalog entry violates the tag invariant: every value
//! is either a decimal numeral or exactly one operand symbol.

use thiserror::Error;

/// Errors produced while building tags or a suggestion catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The value is neither a decimal numeral nor an operand symbol
    #[error("Invalid value '{value}' for tag '{key}': not a number or operand")]
    InvalidValue { key: String, value: String },

    /// Catalog entries need a non-empty display label
    #[error("Catalog entry with value '{0}' has an empty key")]
    EmptyKey(String),

    /// Two entries share a key (compared case-insensitively)
    #[error("Duplicate catalog key: {0}")]
    DuplicateKey(String),

    /// A name could not be resolved against the catalog
    #[error("Unknown tag: {0}")]
    UnknownTag(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
