//! Application state for the formula editor TUI
//!
//! Wraps the editor and the calculator together with everything that only
//! the terminal front end cares about: the current mode, the blocking
//! notice, status messages and the clickable regions of the last frame.

use super::widgets::KeyHint;
use crate::editor::FormulaEditor;
use crate::eval::Calculator;
use crate::ui::output::MessageLevel;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing the formula
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// A blocking notice is shown and must be dismissed
    Notice,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Something the user can click, as laid out in the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Delete control of the chip at this tag index
    DeleteChip(usize),
    /// Entry of the rendered suggestion list
    Suggestion(usize),
    /// The Calculate button
    Calculate,
}

/// Clickable regions recorded while rendering
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    regions: Vec<(Rect, ClickTarget)>,
}

impl Hitboxes {
    /// Forget the regions of the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record a clickable region
    pub fn push(&mut self, area: Rect, target: ClickTarget) {
        self.regions.push((area, target));
    }

    /// Find what lies under the given cell
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Application state for the formula editor
#[derive(Debug)]
pub struct AppState {
    /// Tags, free text and suggestion highlight
    pub editor: FormulaEditor,
    /// Displayed expression text and total
    pub calculator: Calculator,
    /// Current UI mode
    pub mode: Mode,
    /// Text of the blocking notice, shown while in [`Mode::Notice`]
    pub notice: Option<String>,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the editor should exit
    pub should_exit: bool,
    /// Clickable regions of the last rendered frame
    pub hitboxes: Hitboxes,
    /// Key hints shown in the help bar
    pub hints: Vec<KeyHint>,
}

impl AppState {
    /// Create application state around an editor
    #[must_use]
    pub fn new(editor: FormulaEditor, message_ttl: Duration) -> Self {
        Self {
            editor,
            calculator: Calculator::new(),
            mode: Mode::Normal,
            notice: None,
            messages: Vec::new(),
            message_ttl,
            should_exit: false,
            hitboxes: Hitboxes::default(),
            hints: Vec::new(),
        }
    }

    /// Set the key hints shown in the help bar
    #[must_use]
    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Calculate the committed tags
    ///
    /// A malformed expression opens a blocking notice; the total shown
    /// stays at its previous value.
    pub fn calculate(&mut self) {
        match self.calculator.calculate(self.editor.tags()) {
            Ok(evaluation) => {
                self.add_message(
                    MessageLevel::Success,
                    format!("{} = {}", evaluation.expression_text, evaluation.total),
                );
            }
            Err(e) => self.show_notice(format!("Invalid expression: {e}")),
        }
    }

    /// Drop every tag and the free text
    pub fn clear(&mut self) {
        self.editor.clear();
        self.add_message(MessageLevel::Info, "Cleared formula".to_string());
    }

    /// Open a blocking notice
    pub fn show_notice(&mut self, text: String) {
        self.notice = Some(text);
        self.mode = Mode::Notice;
    }

    /// Close the blocking notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.mode = Mode::Normal;
    }

    /// Show or hide the help overlay
    pub fn toggle_help(&mut self) {
        self.mode = if self.mode == Mode::Help {
            Mode::Normal
        } else {
            Mode::Help
        };
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Remove messages whose TTL has passed
    pub fn expire_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|msg| !msg.is_expired(ttl));
    }

    /// Most recent status message
    #[must_use]
    pub fn current_message(&self) -> Option<&StatusMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Operand, Tag};

    fn make_state() -> AppState {
        AppState::new(FormulaEditor::default(), Duration::from_secs(5))
    }

    #[test]
    fn test_successful_calculation_reports_total() {
        let mut state = make_state();
        state.editor.add_tag(Tag::new("A", "2").unwrap());
        state.editor.add_tag(Tag::operand(Operand::Add));
        state.editor.add_tag(Tag::new("B", "3").unwrap());

        state.calculate();

        assert_eq!(state.calculator.total(), 5.0);
        assert_eq!(state.calculator.expression_text(), "2 + 3");
        assert_eq!(state.mode, Mode::Normal);
        let msg = state.current_message().unwrap();
        assert_eq!(msg.level, MessageLevel::Success);
        assert_eq!(msg.text, "2 + 3 = 5");
    }

    #[test]
    fn test_failed_calculation_opens_notice() {
        let mut state = make_state();
        state.editor.add_tag(Tag::new("A", "4").unwrap());
        state.calculate();
        assert_eq!(state.calculator.total(), 4.0);

        state.editor.add_tag(Tag::operand(Operand::Add));
        state.calculate();

        assert_eq!(state.mode, Mode::Notice);
        let notice = state.notice.as_deref().unwrap();
        assert!(notice.starts_with("Invalid expression"));
        assert_eq!(state.calculator.expression_text(), "4 +");
        assert_eq!(state.calculator.total(), 4.0);

        state.dismiss_notice();
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_toggle_help() {
        let mut state = make_state();
        state.toggle_help();
        assert_eq!(state.mode, Mode::Help);
        state.toggle_help();
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = AppState::new(FormulaEditor::default(), Duration::ZERO);
        state.add_message(MessageLevel::Info, "gone".to_string());
        std::thread::sleep(Duration::from_millis(5));
        state.expire_messages();
        assert!(state.current_message().is_none());
    }

    #[test]
    fn test_hitbox_lookup() {
        let mut hitboxes = Hitboxes::default();
        hitboxes.push(Rect::new(2, 1, 3, 1), ClickTarget::DeleteChip(0));
        hitboxes.push(Rect::new(0, 5, 20, 1), ClickTarget::Suggestion(1));

        assert_eq!(hitboxes.target_at(3, 1), Some(ClickTarget::DeleteChip(0)));
        assert_eq!(hitboxes.target_at(5, 1), None);
        assert_eq!(hitboxes.target_at(19, 5), Some(ClickTarget::Suggestion(1)));

        hitboxes.clear();
        assert!(hitboxes.is_empty());
    }
}
