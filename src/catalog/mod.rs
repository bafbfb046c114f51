//! Suggestion catalog
//!
//! The read-only, ordered set of named quantities (and named operators)
//! offered to the user while composing a formula. The catalog is fixed once
//! built; declaration order is significant and acts as the tie-break when
//! suggestions are ranked.
//!
//! # Examples
//!
//! ```
//! use tagcalc::catalog::Catalog;
//!
//! let catalog = Catalog::reference();
//! assert_eq!(catalog.len(), 11);
//! assert_eq!(catalog.list()[2].key(), "SUM");
//! assert_eq!(catalog.find("sum").map(|t| t.value()), Some("+"));
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Operand, Tag, is_decimal_numeral};

use error::Result;
use std::collections::HashSet;

/// Entries of the reference catalog, in declaration order
const REFERENCE_ENTRIES: [(&str, &str); 11] = [
    ("Payment Processing Fees", "1000"),
    ("Payroll Bonus G&A", "2000"),
    ("SUM", "+"),
    ("Salary Increase Month", "3000"),
    ("Bonus Payout Month", "4000"),
    ("Health Insurance Expense", "5000"),
    ("Health Insurance per Employee", "6000"),
    ("COGS Headcount", "7000"),
    ("Contractors G&A", "8000"),
    ("Gross Margin %", "9000"),
    ("S&M Headcount", "10000"),
];

/// Ordered, immutable list of suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Tag>,
}

impl Catalog {
    /// Build a catalog from `(key, value)` pairs
    ///
    /// # Errors
    /// Returns `CatalogError` if an entry has an empty key, an invalid value,
    /// or a key that repeats an earlier one (case-insensitively).
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut tags = Vec::new();

        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            if key.trim().is_empty() {
                return Err(CatalogError::EmptyKey(value));
            }
            if !seen.insert(key.to_lowercase()) {
                return Err(CatalogError::DuplicateKey(key));
            }
            tags.push(Tag::new(key, value)?);
        }

        Ok(Self { entries: tags })
    }

    /// The built-in catalog used when no configuration overrides it
    #[must_use]
    pub fn reference() -> Self {
        let entries = REFERENCE_ENTRIES
            .iter()
            .filter_map(|&(key, value)| Tag::new(key, value).ok())
            .collect();
        Self { entries }
    }

    /// Entries in declaration order
    #[must_use]
    pub fn list(&self) -> &[Tag] {
        &self.entries
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by key, ignoring case
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Tag> {
        let wanted = key.to_lowercase();
        self.entries
            .iter()
            .find(|t| t.key().to_lowercase() == wanted)
    }

    /// Turn a user-supplied token into a tag
    ///
    /// Operand symbols become raw operand tags, catalog keys resolve to their
    /// entry, and decimal literals become a tag labelled with themselves.
    ///
    /// # Errors
    /// Returns `CatalogError::UnknownTag` if the token is none of the above.
    pub fn resolve(&self, token: &str) -> Result<Tag> {
        if let Some(op) = Operand::from_symbol(token) {
            return Ok(Tag::operand(op));
        }
        if let Some(tag) = self.find(token) {
            return Ok(tag.clone());
        }
        if is_decimal_numeral(token) {
            return Tag::new(token, token);
        }
        Err(CatalogError::UnknownTag(token.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_order() {
        let catalog = Catalog::reference();
        let keys: Vec<&str> = catalog.iter().map(Tag::key).collect();
        assert_eq!(keys.len(), 11);
        assert_eq!(keys[0], "Payment Processing Fees");
        assert_eq!(keys[2], "SUM");
        assert_eq!(keys[10], "S&M Headcount");
    }

    #[test]
    fn test_reference_has_only_sum_alias() {
        let catalog = Catalog::reference();
        let aliases: Vec<&str> = catalog
            .iter()
            .filter(|t| Operand::from_symbol(t.value()).is_some())
            .map(Tag::key)
            .collect();
        assert_eq!(aliases, vec!["SUM"]);
    }

    #[test]
    fn test_from_entries_rejects_invalid_value() {
        let result = Catalog::from_entries([("Revenue", "lots")]);
        assert!(matches!(result, Err(CatalogError::InvalidValue { .. })));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_key() {
        let result = Catalog::from_entries([("Revenue", "1"), ("revenue", "2")]);
        assert_eq!(result, Err(CatalogError::DuplicateKey("revenue".into())));
    }

    #[test]
    fn test_from_entries_rejects_empty_key() {
        let result = Catalog::from_entries([("  ", "1")]);
        assert_eq!(result, Err(CatalogError::EmptyKey("1".into())));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = Catalog::reference();
        let tag = catalog.find("cogs headcount").unwrap();
        assert_eq!(tag.value(), "7000");
        assert!(catalog.find("COGS").is_none());
    }

    #[test]
    fn test_resolve_tokens() {
        let catalog = Catalog::reference();
        assert_eq!(
            catalog.resolve("*").unwrap(),
            Tag::operand(Operand::Multiply)
        );
        assert_eq!(catalog.resolve("sum").unwrap().value(), "+");
        assert_eq!(catalog.resolve("2.5").unwrap().key(), "2.5");
        assert_eq!(
            catalog.resolve("Nope"),
            Err(CatalogError::UnknownTag("Nope".into()))
        );
    }
}
