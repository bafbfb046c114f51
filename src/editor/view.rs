//! Derived view data read by the presentation layer

use crate::catalog::Tag;

/// One committed tag as the front end should draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipView<'a> {
    /// Position in the tag sequence (the index passed to `delete_tag`)
    pub index: usize,
    pub tag: &'a Tag,
    /// False for operand symbols, which render without a delete control
    pub deletable: bool,
}

impl<'a> ChipView<'a> {
    #[must_use]
    pub fn new(index: usize, tag: &'a Tag) -> Self {
        Self {
            index,
            tag,
            deletable: !tag.is_operand_label(),
        }
    }

    /// Text shown on the chip
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.tag.key()
    }
}

/// One entry of the rendered (matching-only) suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionView<'a> {
    /// Position in the rendered list
    pub index: usize,
    pub tag: &'a Tag,
    pub highlighted: bool,
}

impl<'a> SuggestionView<'a> {
    /// Text shown for the suggestion
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.tag.key()
    }
}
