//! Colors for the formula editor TUI
//!
//! Colors are assigned by role in the formula: named chips, operand chips,
//! the total, and the alert used for delete marks and the invalid-expression
//! notice.

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Palette of the formula editor
#[derive(Debug, Clone)]
pub struct Theme {
    /// Named tag chips, drawn reversed
    pub chip: Color,
    /// Operand chips
    pub operand: Color,
    /// The computed total and success messages
    pub result: Color,
    /// Delete marks, the notice frame and error messages
    pub alert: Color,
    /// Warning messages
    pub caution: Color,
    /// Background of the highlighted suggestion
    pub highlight: Color,
    /// Focused frame, key names and the Calculate button
    pub accent: Color,
    /// Frames of unfocused panes
    pub frame: Color,
    /// Suggestion values, separators and placeholders
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            chip: Color::LightBlue,
            operand: Color::LightYellow,
            result: Color::LightGreen,
            alert: Color::LightRed,
            caution: Color::Yellow,
            highlight: Color::Blue,
            accent: Color::Cyan,
            frame: Color::Gray,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    #[must_use]
    pub fn chip_style(&self) -> Style {
        Style::default()
            .fg(self.chip)
            .add_modifier(Modifier::REVERSED)
    }

    #[must_use]
    pub fn operand_style(&self) -> Style {
        Style::default()
            .fg(self.operand)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn total_style(&self) -> Style {
        Style::default()
            .fg(self.result)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn alert_style(&self) -> Style {
        Style::default().fg(self.alert)
    }

    /// Highlighted row of the suggestion list
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn frame_style(&self) -> Style {
        Style::default().fg(self.frame)
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a status message of the given level
    #[must_use]
    pub fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => Style::default().fg(self.result),
            MessageLevel::Error => self.alert_style(),
            MessageLevel::Warning => Style::default().fg(self.caution),
            MessageLevel::Info => Style::default().fg(self.accent),
            MessageLevel::Normal => Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_roles_are_distinct() {
        let theme = Theme::default();
        let chip = theme.chip_style();
        assert_ne!(chip, theme.operand_style());
        assert!(chip.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(theme.operand_style().fg, Some(theme.operand));
    }

    #[test]
    fn test_style_for_level() {
        let theme = Theme::default();
        let success = theme.style_for_level(MessageLevel::Success);
        assert_eq!(success.fg, Some(theme.result));
        let error = theme.style_for_level(MessageLevel::Error);
        assert_eq!(error, theme.alert_style());
        let normal = theme.style_for_level(MessageLevel::Normal);
        assert_eq!(normal, Style::default());
    }
}
