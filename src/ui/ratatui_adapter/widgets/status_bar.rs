//! Status line showing the latest message and a tag count

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status line widget
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    tag_count: usize,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        tag_count: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            tag_count,
            theme,
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "! ",
            MessageLevel::Info | MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(area);

        if let Some(msg) = self.message {
            let style = self.theme.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        let count = match self.tag_count {
            1 => "1 tag".to_string(),
            n => format!("{n} tags"),
        };
        Paragraph::new(Span::styled(count, self.theme.muted_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
