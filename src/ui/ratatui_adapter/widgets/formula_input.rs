//! Formula input widget: committed tags as chips followed by the text field

use crate::editor::ChipView;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Suffix drawn on chips that can be deleted
const DELETE_MARK: &str = "× ";

/// Where one chip lands on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    /// Index of the tag in the sequence
    pub index: usize,
    /// The whole chip
    pub area: Rect,
    /// The delete control, absent for operand chips
    pub delete: Option<Rect>,
}

fn text_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

fn chip_text(chip: &ChipView<'_>) -> String {
    format!(" {} ", chip.label())
}

/// Flow chips left to right, wrapping onto new rows
///
/// Chips that fall below `area` are left out.
#[must_use]
pub fn layout_chips(chips: &[ChipView<'_>], area: Rect) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(chips.len());
    if area.width == 0 {
        return slots;
    }

    let right = area.right();
    let mut x = area.x;
    let mut y = area.y;

    for chip in chips {
        let mark = if chip.deletable {
            text_width(DELETE_MARK)
        } else {
            0
        };
        let width = text_width(&chip_text(chip))
            .saturating_add(mark)
            .min(area.width);

        if x > area.x && x.saturating_add(width) > right {
            x = area.x;
            y = y.saturating_add(1);
        }
        if y >= area.bottom() {
            break;
        }

        let chip_area = Rect::new(x, y, width, 1);
        let delete =
            (chip.deletable && width > mark).then(|| Rect::new(x + width - mark, y, mark, 1));

        slots.push(ChipSlot {
            index: chip.index,
            area: chip_area,
            delete,
        });
        x = x.saturating_add(width).saturating_add(1);
    }

    slots
}

/// Formula input widget
pub struct FormulaInput<'a> {
    chips: &'a [ChipView<'a>],
    free_text: &'a str,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FormulaInput<'a> {
    /// Create a new formula input widget
    #[must_use]
    pub const fn new(chips: &'a [ChipView<'a>], free_text: &'a str, theme: &'a Theme) -> Self {
        Self {
            chips,
            free_text,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Total height, borders included, needed at the given outer width
    #[must_use]
    pub fn required_height(chips: &[ChipView<'_>], width: u16) -> u16 {
        let inner = Rect {
            x: 0,
            y: 0,
            width: width.saturating_sub(2),
            height: u16::from(u8::MAX),
        };
        let chip_rows = layout_chips(chips, inner)
            .last()
            .map_or(0, |slot| slot.area.y + 1);
        chip_rows + 3
    }

    /// Area inside the border where chips are drawn
    #[must_use]
    pub fn chip_area(area: Rect) -> Rect {
        let inner = Self::block(Style::default()).inner(area);
        Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        }
    }

    fn block(border_style: Style) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Formula ")
    }
}

impl Widget for FormulaInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.frame_style()
        };

        let block = Self::block(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        for slot in layout_chips(self.chips, Self::chip_area(area)) {
            let Some(chip) = self.chips.iter().find(|c| c.index == slot.index) else {
                continue;
            };
            let style = if chip.deletable {
                self.theme.chip_style()
            } else {
                self.theme.operand_style()
            };
            buf.set_stringn(
                slot.area.x,
                slot.area.y,
                chip_text(chip),
                usize::from(slot.area.width),
                style,
            );
            if let Some(delete) = slot.delete {
                buf.set_stringn(
                    delete.x,
                    delete.y,
                    DELETE_MARK,
                    usize::from(delete.width),
                    style.patch(self.theme.alert_style()),
                );
            }
        }

        let input_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        let line = Line::from(vec![
            Span::styled(">", self.theme.muted_style()),
            Span::raw(" "),
            Span::raw(self.free_text),
            Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        Paragraph::new(line).render(input_row, buf);
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

    fn sample_tags() -> Vec<Tag> {
        vec![
            Tag::new("Revenue", "100").unwrap(),
            Tag::operand(Operand::Add),
            Tag::new("Costs", "40").unwrap(),
        ]
    }

    fn views(tags: &[Tag]) -> Vec<ChipView<'_>> {
        tags.iter()
            .enumerate()
            .map(|(i, t)| ChipView::new(i, t))
            .collect()
    }

    #[test]
    fn test_layout_single_row() {
        let tags = sample_tags();
        let chips = views(&tags);
        let slots = layout_chips(&chips, Rect::new(1, 1, 40, 3));

        assert_eq!(slots.len(), 3);
        // " Revenue " + "× "
        assert_eq!(slots[0].area, Rect::new(1, 1, 11, 1));
        assert_eq!(slots[0].delete, Some(Rect::new(10, 1, 2, 1)));
        // " + " has no delete control
        assert_eq!(slots[1].area, Rect::new(13, 1, 3, 1));
        assert_eq!(slots[1].delete, None);
        assert_eq!(slots[2].area.x, 17);
    }

    #[test]
    fn test_layout_wraps() {
        let tags = sample_tags();
        let chips = views(&tags);
        let slots = layout_chips(&chips, Rect::new(0, 0, 14, 5));

        assert_eq!(slots[0].area.y, 0);
        assert_eq!(slots[1].area.y, 1);
        assert_eq!(slots[1].area.x, 0);
        assert_eq!(slots[2].area.y, 1);
    }

    #[test]
    fn test_layout_drops_chips_below_area() {
        let tags = sample_tags();
        let chips = views(&tags);
        let slots = layout_chips(&chips, Rect::new(0, 0, 14, 1));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_required_height() {
        let tags = sample_tags();
        let chips = views(&tags);
        assert_eq!(FormulaInput::required_height(&[], 40), 3);
        assert_eq!(FormulaInput::required_height(&chips, 42), 4);
        assert_eq!(FormulaInput::required_height(&chips, 16), 5);
    }

    #[test]
    fn test_render_chips_and_text() {
        let tags = sample_tags();
        let chips = views(&tags);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);

        FormulaInput::new(&chips, "gro", &theme).render(area, &mut buf);

        let chip_row = row_text(&buf, 1);
        assert!(chip_row.contains(" Revenue × "));
        assert!(chip_row.contains(" + "));
        assert!(chip_row.contains(" Costs × "));

        let input_row = row_text(&buf, 2);
        assert!(input_row.contains("> gro│"));
    }
}
