//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "F5", "ctrl+l")
    pub key: String,
    /// Action description (e.g., "calculate", "clear")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for the formula editor
    #[must_use]
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("↑/↓", "choose"),
            KeyHint::new("Enter", "add"),
            KeyHint::new("F5", "calculate"),
            KeyHint::new("ctrl+l", "clear"),
            KeyHint::new("F1", "help"),
            KeyHint::new("ESC", "quit"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.muted_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.accent_style()));
            spans.push(Span::styled(":", self.theme.muted_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hints() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("F5", "calculate"), KeyHint::new("ESC", "quit")];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        HelpBar::new(&hints, &theme).render(area, &mut buf);

        let text: String = (0..40).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(text.trim_end(), "F5:calculate  ESC:quit");
    }
}
