//! Result panel: expression text, total and the Calculate button

use crate::eval::Calculator;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const BUTTON_LABEL: &str = "[ Calculate ]";

/// Result panel widget
pub struct ResultPanel<'a> {
    calculator: &'a Calculator,
    theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    /// Height of the panel, borders included
    pub const HEIGHT: u16 = 4;

    #[must_use]
    pub const fn new(calculator: &'a Calculator, theme: &'a Theme) -> Self {
        Self { calculator, theme }
    }

    /// Where the Calculate button is drawn inside `area`
    #[must_use]
    pub fn button_area(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let width = u16::try_from(BUTTON_LABEL.len())
            .unwrap_or(u16::MAX)
            .min(inner.width);
        Rect::new(
            inner.right().saturating_sub(width),
            inner.y,
            width,
            inner.height.min(1),
        )
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.frame_style())
            .title(" Result ");
        let inner = block.inner(area);
        block.render(area, buf);

        let expression = if self.calculator.expression_text().is_empty() {
            Span::styled("(not calculated)", self.theme.muted_style())
        } else {
            Span::raw(self.calculator.expression_text())
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Expression: ", self.theme.muted_style()),
                expression,
            ]),
            Line::from(vec![
                Span::styled("Total:      ", self.theme.muted_style()),
                Span::styled(
                    self.calculator.total().to_string(),
                    self.theme.total_style(),
                ),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);

        let button = Self::button_area(area);
        Paragraph::new(Span::styled(
            BUTTON_LABEL,
            self.theme.accent_style().add_modifier(Modifier::REVERSED),
        ))
        .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Operand, Tag};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_button_area() {
        let area = Rect::new(0, 20, 60, ResultPanel::HEIGHT);
        assert_eq!(ResultPanel::button_area(area), Rect::new(46, 21, 13, 1));
    }

    #[test]
    fn test_render_before_calculation() {
        let calculator = Calculator::new();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, ResultPanel::HEIGHT);
        let mut buf = Buffer::empty(area);

        ResultPanel::new(&calculator, &theme).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Expression: (not calculated)"));
        assert!(row_text(&buf, 1).contains("[ Calculate ]"));
        assert!(row_text(&buf, 2).contains("Total:      0"));
    }

    #[test]
    fn test_render_after_calculation() {
        let mut calculator = Calculator::new();
        let tags = vec![
            Tag::new("A", "1.5").unwrap(),
            Tag::operand(Operand::Multiply),
            Tag::new("B", "4").unwrap(),
        ];
        calculator.calculate(&tags).unwrap();

        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, ResultPanel::HEIGHT);
        let mut buf = Buffer::empty(area);
        ResultPanel::new(&calculator, &theme).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Expression: 1.5 * 4"));
        assert!(row_text(&buf, 2).contains("Total:      6"));
    }
}
