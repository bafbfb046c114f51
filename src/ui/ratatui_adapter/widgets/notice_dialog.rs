//! Blocking notice dialog
//!
//! Modal overlay shown when a calculation fails. The editor ignores input
//! until the notice is dismissed.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Notice dialog overlay widget
pub struct NoticeDialog<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> NoticeDialog<'a> {
    /// Create a new notice dialog widget
    #[must_use]
    pub const fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title: "Notice",
            message,
            theme,
        }
    }

    /// Set the dialog title
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_width = u16::try_from(self.message.chars().count())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let width = message_width
            .clamp(30, 70)
            .min(area.width.saturating_sub(4));
        let text_width = width.saturating_sub(4).max(1);
        let message_lines = message_width.saturating_sub(4).div_ceil(text_width).max(1);
        let height = message_lines + 6;

        let modal_area = Self::centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.alert_style().add_modifier(Modifier::BOLD))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),             // Spacing
            Constraint::Length(message_lines), // Message
            Constraint::Length(1),             // Spacing
            Constraint::Length(1),             // Help
        ])
        .horizontal_margin(1)
        .split(inner);

        Paragraph::new(self.message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new("Enter/ESC: dismiss")
            .style(self.theme.muted_style())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        (buf.area.y..buf.area.bottom())
            .map(|y| {
                (buf.area.x..buf.area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_message_and_hint() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        NoticeDialog::new("Invalid expression: division by zero", &theme)
            .title("Invalid expression")
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains(" Invalid expression "));
        assert!(text.contains("Invalid expression: division by zero"));
        assert!(text.contains("Enter/ESC: dismiss"));
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let rect = NoticeDialog::centered_rect(40, 8, Rect::new(0, 0, 20, 5));
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }
}
