//! Suggestion ranking against the in-progress free text
//!
//! Ranking is a display ordering rather than a true filter: [`rank`] keeps
//! every catalog entry, moving the entries whose key contains the free text
//! (ignoring case) to the front. Only that matching prefix is ever shown to
//! the user, which is what [`matching`] returns.
//!
//! ```
//! use tagcalc::catalog::Catalog;
//! use tagcalc::suggest;
//!
//! let catalog = Catalog::reference();
//! let shown = suggest::matching(&catalog, "headcount");
//! let keys: Vec<&str> = shown.iter().map(|t| t.key()).collect();
//! assert_eq!(keys, ["COGS Headcount", "S&M Headcount"]);
//! ```

use crate::catalog::Tag;

/// Case-insensitive substring test used for both ranking and rendering
#[must_use]
pub fn key_matches(key: &str, free_text: &str) -> bool {
    free_text.is_empty() || key.to_lowercase().contains(&free_text.to_lowercase())
}

/// Rank catalog entries: matches first, then non-matches
///
/// Each group keeps the catalog's relative order. With empty free text the
/// catalog is returned unchanged.
#[must_use]
pub fn rank<'a>(catalog: impl IntoIterator<Item = &'a Tag>, free_text: &str) -> Vec<&'a Tag> {
    if free_text.is_empty() {
        return catalog.into_iter().collect();
    }

    let needle = free_text.to_lowercase();
    let (mut matched, not_matched): (Vec<&Tag>, Vec<&Tag>) = catalog
        .into_iter()
        .partition(|tag| tag.key().to_lowercase().contains(&needle));
    matched.extend(not_matched);
    matched
}

/// The suggestions actually shown: the matching prefix of [`rank`]
#[must_use]
pub fn matching<'a>(catalog: impl IntoIterator<Item = &'a Tag>, free_text: &str) -> Vec<&'a Tag> {
    rank(catalog, free_text)
        .into_iter()
        .take_while(|tag| key_matches(tag.key(), free_text))
        .collect()
}
