//! Event handling for the formula editor TUI
//!
//! Maps keyboard and mouse events onto editor and calculator transitions.

use super::state::{AppState, ClickTarget, Mode};
use crate::editor::{EditorKey, KeyOutcome};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Leave the editor
    Exit,
    /// No action taken
    Ignored,
}

/// Handle a key press in normal mode
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => exit(state),
        KeyCode::Char('c') if ctrl => exit(state),
        KeyCode::F(1) => {
            state.toggle_help();
            EventResult::Continue
        }
        KeyCode::F(5) => {
            state.calculate();
            EventResult::Continue
        }
        KeyCode::Char('r') if ctrl => {
            state.calculate();
            EventResult::Continue
        }
        KeyCode::Char('l') if ctrl => {
            state.clear();
            EventResult::Continue
        }
        KeyCode::Enter => editor_key(state, EditorKey::Enter),
        KeyCode::Down => editor_key(state, EditorKey::ArrowDown),
        KeyCode::Up => editor_key(state, EditorKey::ArrowUp),
        KeyCode::Backspace => {
            // With free text left, Backspace falls through to the text field
            if state.editor.handle_key(EditorKey::Backspace) == KeyOutcome::Ignored {
                state.editor.pop_char();
            }
            EventResult::Continue
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            state.editor.push_char(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn editor_key(state: &mut AppState, key: EditorKey) -> EventResult {
    match state.editor.handle_key(key) {
        KeyOutcome::Handled { .. } => EventResult::Continue,
        KeyOutcome::Ignored => EventResult::Ignored,
    }
}

const fn exit(state: &mut AppState) -> EventResult {
    state.should_exit = true;
    EventResult::Exit
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle events while a notice blocks the editor
fn handle_notice_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            state.dismiss_notice();
            EventResult::Continue
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.dismiss_notice();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a key press according to the current mode
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, key),
        Mode::Help => handle_help_mode(state, key),
        Mode::Notice => handle_notice_mode(state, key),
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match (state.mode, mouse.kind) {
        (Mode::Notice, MouseEventKind::Down(MouseButton::Left)) => {
            state.dismiss_notice();
            EventResult::Continue
        }
        (Mode::Help, MouseEventKind::Down(MouseButton::Left)) => {
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        (Mode::Normal, MouseEventKind::Down(MouseButton::Left)) => {
            match state.hitboxes.target_at(mouse.column, mouse.row) {
                Some(ClickTarget::DeleteChip(index)) => {
                    state.editor.delete_tag(index);
                    EventResult::Continue
                }
                Some(ClickTarget::Suggestion(index)) => {
                    state.editor.select_suggestion(index);
                    EventResult::Continue
                }
                Some(ClickTarget::Calculate) => {
                    state.calculate();
                    EventResult::Continue
                }
                None => EventResult::Ignored,
            }
        }
        (Mode::Normal, MouseEventKind::ScrollDown) => editor_key(state, EditorKey::ArrowDown),
        (Mode::Normal, MouseEventKind::ScrollUp) => editor_key(state, EditorKey::ArrowUp),
        _ => EventResult::Ignored,
    }
}

/// Handle one terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::FormulaEditor;
    use ratatui::layout::Rect;

    fn make_state() -> AppState {
        AppState::new(FormulaEditor::default(), Duration::from_secs(5))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, press(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn chip_labels(state: &AppState) -> Vec<String> {
        state
            .editor
            .chips()
            .iter()
            .map(|c| c.label().to_string())
            .collect()
    }

    #[test]
    fn test_typing_and_enter_commits_suggestion() {
        let mut state = make_state();
        type_text(&mut state, "cogs");
        assert_eq!(state.editor.free_text(), "cogs");

        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(chip_labels(&state), ["COGS Headcount"]);
        assert_eq!(state.editor.free_text(), "");
    }

    #[test]
    fn test_operand_key_commits_operand() {
        let mut state = make_state();
        type_text(&mut state, "pay*");
        assert_eq!(chip_labels(&state), ["*"]);
        assert_eq!(state.editor.free_text(), "");
    }

    #[test]
    fn test_arrow_navigation() {
        let mut state = make_state();
        type_text(&mut state, "health");

        handle_key(&mut state, press(KeyCode::Down));
        handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(state.editor.highlighted_index(), Some(1));

        handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(state.editor.highlighted_index(), Some(0));

        handle_key(&mut state, press(KeyCode::Up));
        assert_eq!(state.editor.highlighted_index(), Some(1));

        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(chip_labels(&state), ["Health Insurance per Employee"]);
    }

    #[test]
    fn test_backspace_edits_text_then_deletes_tags() {
        let mut state = make_state();
        type_text(&mut state, "2+ab");

        handle_key(&mut state, press(KeyCode::Backspace));
        assert_eq!(state.editor.free_text(), "a");
        assert_eq!(state.editor.tags().len(), 1);

        handle_key(&mut state, press(KeyCode::Backspace));
        assert_eq!(state.editor.free_text(), "");
        assert_eq!(state.editor.tags().len(), 1);

        handle_key(&mut state, press(KeyCode::Backspace));
        assert!(state.editor.tags().is_empty());
    }

    #[test]
    fn test_calculate_keys() {
        let mut state = make_state();
        state
            .editor
            .add_tag(crate::catalog::Tag::new("Two", "2").unwrap());

        handle_key(&mut state, press(KeyCode::F(5)));
        assert_eq!(state.calculator.total(), 2.0);

        type_text(&mut state, "*");
        state
            .editor
            .add_tag(crate::catalog::Tag::new("Four", "4").unwrap());
        handle_key(&mut state, ctrl('r'));
        assert_eq!(state.calculator.total(), 8.0);
        assert_eq!(state.calculator.expression_text(), "2 * 4");
    }

    #[test]
    fn test_invalid_calculation_blocks_until_dismissed() {
        let mut state = make_state();
        type_text(&mut state, "+");
        handle_key(&mut state, press(KeyCode::F(5)));
        assert_eq!(state.mode, Mode::Notice);

        // Typing is blocked while the notice is open
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Char('x'))),
            EventResult::Ignored
        );
        assert_eq!(state.editor.free_text(), "");

        // Esc dismisses the notice instead of quitting
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Esc)),
            EventResult::Continue
        );
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_clear_and_help() {
        let mut state = make_state();
        type_text(&mut state, "1+2");
        handle_key(&mut state, ctrl('l'));
        assert!(state.editor.tags().is_empty());
        assert_eq!(state.editor.free_text(), "");

        handle_key(&mut state, press(KeyCode::F(1)));
        assert_eq!(state.mode, Mode::Help);
        handle_key(&mut state, press(KeyCode::Char('q')));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.editor.free_text(), "");
    }

    #[test]
    fn test_abort() {
        let mut state = make_state();
        assert_eq!(
            handle_key(&mut state, press(KeyCode::Esc)),
            EventResult::Exit
        );
        assert!(state.should_exit);

        let mut state = make_state();
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Exit);
        assert!(state.should_exit);
    }

    #[test]
    fn test_mouse_clicks_use_hitboxes() {
        let mut state = make_state();
        type_text(&mut state, "1+2+");
        assert_eq!(chip_labels(&state), ["+", "+"]);
        state
            .hitboxes
            .push(Rect::new(10, 0, 1, 1), ClickTarget::DeleteChip(0));
        state
            .hitboxes
            .push(Rect::new(0, 4, 30, 1), ClickTarget::Suggestion(2));
        state
            .hitboxes
            .push(Rect::new(40, 8, 13, 1), ClickTarget::Calculate);

        handle_mouse(&mut state, click(10, 0));
        assert_eq!(chip_labels(&state), ["+"]);

        handle_mouse(&mut state, click(5, 4));
        assert_eq!(chip_labels(&state), ["+", "SUM"]);

        assert_eq!(
            handle_mouse(&mut state, click(70, 20)),
            EventResult::Ignored
        );

        handle_mouse(&mut state, click(45, 8));
        assert_eq!(state.mode, Mode::Notice);
        assert_eq!(state.calculator.expression_text(), "+ +");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = make_state();
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(
            handle_event(&mut state, Event::Key(key)),
            EventResult::Ignored
        );
        assert_eq!(state.editor.free_text(), "");
    }
}
