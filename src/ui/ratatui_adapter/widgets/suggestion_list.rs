//! Suggestion list widget for the entries matching the free text

use crate::editor::SuggestionView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Suggestion list widget with the highlighted entry kept in view
pub struct SuggestionList<'a> {
    suggestions: &'a [SuggestionView<'a>],
    theme: &'a Theme,
    title: String,
}

impl<'a> SuggestionList<'a> {
    /// Create a new suggestion list widget
    ///
    /// `catalog_len` is only used for the `(shown/total)` title.
    #[must_use]
    pub fn new(
        suggestions: &'a [SuggestionView<'a>],
        catalog_len: usize,
        theme: &'a Theme,
    ) -> Self {
        let title = format!(" Suggestions ({}/{catalog_len}) ", suggestions.len());
        Self {
            suggestions,
            theme,
            title,
        }
    }

    fn block(&self) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_style())
            .title(self.title.as_str())
    }

    /// First entry shown when `height` rows are available
    fn scroll_offset(suggestions: &[SuggestionView<'_>], height: usize) -> usize {
        let highlighted = suggestions.iter().position(|s| s.highlighted);
        match highlighted {
            Some(i) if height > 0 && i >= height => i + 1 - height,
            _ => 0,
        }
    }

    /// Screen row of every visible entry, paired with its list index
    #[must_use]
    pub fn rows(&self, area: Rect) -> Vec<(Rect, usize)> {
        let inner = self.block().inner(area);
        let height = usize::from(inner.height);
        let offset = Self::scroll_offset(self.suggestions, height);

        self.suggestions
            .iter()
            .skip(offset)
            .take(height)
            .zip(inner.y..)
            .map(|(s, y)| (Rect::new(inner.x, y, inner.width, 1), s.index))
            .collect()
    }

    fn render_item(&self, suggestion: &SuggestionView<'a>) -> ListItem<'a> {
        let (cursor, text_style) = if suggestion.highlighted {
            (">", self.theme.highlight_style())
        } else {
            (" ", Style::default())
        };

        ListItem::new(Line::from(vec![
            Span::styled(cursor, self.theme.accent_style()),
            Span::raw(" "),
            Span::styled(suggestion.label(), text_style),
            Span::styled(
                format!("  {}", suggestion.tag.value()),
                self.theme.muted_style(),
            ),
        ]))
    }
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        let height = usize::from(inner.height);
        let offset = Self::scroll_offset(self.suggestions, height);

        let items: Vec<ListItem> = if self.suggestions.is_empty() {
            vec![ListItem::new(Span::styled(
                "  no matching suggestions",
                self.theme.muted_style(),
            ))]
        } else {
            self.suggestions
                .iter()
                .skip(offset)
                .take(height)
                .map(|s| self.render_item(s))
                .collect()
        };

        List::new(items).block(block).render(area, buf);
    }
}
