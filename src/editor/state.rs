//! Tag sequence editor state machine
//!
//! [`FormulaEditor`] owns the committed tags, the free text and the
//! highlighted suggestion. Every mutation goes through one of its
//! transitions so the highlight is reset exactly when the rendered
//! suggestion list can change.

use super::keystroke::{Keystroke, classify_keystroke};
use super::view::{ChipView, SuggestionView};
use crate::catalog::{Catalog, Tag};
use crate::suggest;

/// Keys with editor-level meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Enter,
    Backspace,
    ArrowDown,
    ArrowUp,
}

/// How the editor reacted to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed. `prevent_default` asks the host to suppress
    /// its own handling of the key (list scrolling for arrow keys).
    Handled { prevent_default: bool },
    /// The editor did nothing; the host may handle the key itself
    Ignored,
}

/// Editor state for one formula
#[derive(Debug, Clone)]
pub struct FormulaEditor {
    catalog: Catalog,
    tags: Vec<Tag>,
    free_text: String,
    highlighted: Option<usize>,
}

impl Default for FormulaEditor {
    fn default() -> Self {
        Self::new(Catalog::reference())
    }
}

impl FormulaEditor {
    /// Create an empty editor over `catalog`
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            tags: Vec::new(),
            free_text: String::new(),
            highlighted: None,
        }
    }

    /// The suggestion catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Committed tags, in order
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// In-progress, uncommitted text
    #[must_use]
    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Index into the rendered suggestion list, if any entry is highlighted
    #[must_use]
    pub const fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Apply the full updated value of the text field
    ///
    /// If the value ends in an operand symbol, that operand is committed as a
    /// tag and the free text is cleared, whatever it held before. Otherwise
    /// the value becomes the free text.
    pub fn on_input_change(&mut self, new_text: &str) -> Keystroke {
        let keystroke = classify_keystroke(new_text);
        match &keystroke {
            Keystroke::CommitOperand(op) => {
                log::debug!("committing operand '{op}'");
                self.tags.push(Tag::operand(*op));
                self.free_text.clear();
            }
            Keystroke::Append(text) => {
                self.free_text.clone_from(text);
            }
        }
        self.highlighted = None;
        keystroke
    }

    /// Type one character at the end of the text field
    pub fn push_char(&mut self, c: char) -> Keystroke {
        let mut new_text = self.free_text.clone();
        new_text.push(c);
        self.on_input_change(&new_text)
    }

    /// Erase the last character of the text field
    ///
    /// Returns `None` without changing anything when the free text is
    /// already empty.
    pub fn pop_char(&mut self) -> Option<Keystroke> {
        if self.free_text.is_empty() {
            return None;
        }
        let mut new_text = self.free_text.clone();
        new_text.pop();
        Some(self.on_input_change(&new_text))
    }

    /// Append `tag` and clear the free text
    pub fn add_tag(&mut self, tag: Tag) {
        log::debug!("adding tag '{}' = {}", tag.key(), tag.value());
        self.tags.push(tag);
        self.free_text.clear();
        self.highlighted = None;
    }

    /// Add the entry at `index` of the rendered suggestion list
    ///
    /// Returns false if there is no such entry.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(tag) = self.matching().get(index).map(|&t| t.clone()) else {
            log::debug!("ignoring selection of suggestion {index}: out of range");
            return false;
        };
        self.add_tag(tag);
        true
    }

    /// Remove the tag at `index`
    ///
    /// Out-of-range indices are ignored.
    pub fn delete_tag(&mut self, index: usize) -> Option<Tag> {
        if index >= self.tags.len() {
            log::debug!(
                "ignoring delete of tag {index}: sequence has {} tag(s)",
                self.tags.len()
            );
            return None;
        }
        let removed = self.tags.remove(index);
        log::debug!("deleted tag '{}' at {index}", removed.key());
        self.highlighted = None;
        Some(removed)
    }

    /// Remove every tag and the free text
    pub fn clear(&mut self) {
        self.tags.clear();
        self.free_text.clear();
        self.highlighted = None;
    }

    /// React to a navigation or editing key
    pub fn handle_key(&mut self, key: EditorKey) -> KeyOutcome {
        match key {
            EditorKey::Enter => self.accept_highlighted(),
            EditorKey::Backspace if self.free_text.is_empty() => {
                match self.tags.len().checked_sub(1) {
                    Some(last) => {
                        self.delete_tag(last);
                        KeyOutcome::Handled {
                            prevent_default: false,
                        }
                    }
                    None => KeyOutcome::Ignored,
                }
            }
            EditorKey::Backspace => KeyOutcome::Ignored,
            EditorKey::ArrowDown => {
                self.move_highlight(true);
                KeyOutcome::Handled {
                    prevent_default: true,
                }
            }
            EditorKey::ArrowUp => {
                self.move_highlight(false);
                KeyOutcome::Handled {
                    prevent_default: true,
                }
            }
        }
    }

    fn accept_highlighted(&mut self) -> KeyOutcome {
        let shown = self.matching();
        let chosen = self
            .highlighted
            .and_then(|i| shown.get(i))
            .or_else(|| shown.first())
            .map(|&t| t.clone());

        match chosen {
            Some(tag) => {
                self.add_tag(tag);
                KeyOutcome::Handled {
                    prevent_default: false,
                }
            }
            None => KeyOutcome::Ignored,
        }
    }

    fn move_highlight(&mut self, forward: bool) {
        let len = self.matching().len();
        if len == 0 {
            self.highlighted = None;
            return;
        }

        self.highlighted = Some(match (self.highlighted, forward) {
            (Some(i), true) if i + 1 < len => i + 1,
            (_, true) => 0,
            (Some(i), false) if i > 0 && i < len => i - 1,
            (_, false) => len - 1,
        });
        log::trace!("highlighted suggestion {:?}", self.highlighted);
    }

    fn matching(&self) -> Vec<&Tag> {
        suggest::matching(&self.catalog, &self.free_text)
    }

    /// The full ranked catalog for the current free text
    #[must_use]
    pub fn ranked(&self) -> Vec<&Tag> {
        suggest::rank(&self.catalog, &self.free_text)
    }

    /// The suggestions to render: matching entries only
    #[must_use]
    pub fn suggestions(&self) -> Vec<SuggestionView<'_>> {
        self.matching()
            .into_iter()
            .enumerate()
            .map(|(index, tag)| SuggestionView {
                index,
                tag,
                highlighted: self.highlighted == Some(index),
            })
            .collect()
    }

    /// The committed tags as chips to render
    #[must_use]
    pub fn chips(&self) -> Vec<ChipView<'_>> {
        self.tags
            .iter()
            .enumerate()
            .map(|(index, tag)| ChipView::new(index, tag))
            .collect()
    }
}
