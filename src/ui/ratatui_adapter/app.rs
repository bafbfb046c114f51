//! Terminal front end for the formula editor
//!
//! Owns the terminal for the lifetime of an editing session: sets it up,
//! runs the draw/poll loop and restores it afterwards.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, ClickTarget, Mode};
use super::theme::Theme;
use super::widgets::{
    FormulaInput, HelpBar, HelpOverlay, NoticeDialog, ResultPanel, StatusBar, SuggestionList,
    layout_chips,
};
use crate::editor::FormulaEditor;
use crate::eval::Calculator;
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::Duration;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 14;

/// Interactive formula editor
#[derive(Debug, Default)]
pub struct FormulaApp {
    theme: Theme,
}

impl FormulaApp {
    /// Create a formula app with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run an editing session until the user quits
    ///
    /// Returns the calculator as it stood at exit, so the caller can report
    /// the last expression and total.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal is too small or cannot be driven.
    pub fn run(&self, editor: FormulaEditor, message_ttl: Duration) -> Result<Calculator> {
        let (width, height) = terminal::size()?;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(UiError::TerminalTooSmall {
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        let mut state = AppState::new(editor, message_ttl).with_hints(HelpBar::default_hints());
        let mut terminal = Self::setup_terminal()?;
        log::debug!(
            "editor started with {} suggestion(s)",
            state.editor.catalog().len()
        );

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, &mut state);

        if let Err(e) = Self::cleanup_terminal() {
            log::warn!("terminal cleanup failed: {e}");
        }

        result.map(|()| state.calculator)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            state.expire_messages();
            terminal.draw(|frame| render(frame, state, &self.theme))?;

            let result = poll_and_handle(state, Duration::from_millis(50))?;
            if result == EventResult::Exit || state.should_exit {
                log::debug!("editor closed with {} tag(s)", state.editor.tags().len());
                return Ok(());
            }
        }
    }
}

/// Draw one frame and record its clickable regions
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    state.hitboxes.clear();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        frame.render_widget(
            Paragraph::new(Line::styled("Terminal too small", theme.alert_style())),
            area,
        );
        return;
    }

    let chips = state.editor.chips();
    let input_height = FormulaInput::required_height(&chips, area.width).clamp(3, area.height / 3);

    let [input_area, list_area, result_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(input_height),
        Constraint::Min(3),
        Constraint::Length(ResultPanel::HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    for slot in layout_chips(&chips, FormulaInput::chip_area(input_area)) {
        if let Some(delete) = slot.delete {
            state
                .hitboxes
                .push(delete, ClickTarget::DeleteChip(slot.index));
        }
    }
    frame.render_widget(
        FormulaInput::new(&chips, state.editor.free_text(), theme)
            .focused(state.mode == Mode::Normal),
        input_area,
    );

    let suggestions = state.editor.suggestions();
    let list = SuggestionList::new(&suggestions, state.editor.catalog().len(), theme);
    for (row, index) in list.rows(list_area) {
        state.hitboxes.push(row, ClickTarget::Suggestion(index));
    }
    frame.render_widget(list, list_area);

    state.hitboxes.push(
        ResultPanel::button_area(result_area),
        ClickTarget::Calculate,
    );
    frame.render_widget(ResultPanel::new(&state.calculator, theme), result_area);

    frame.render_widget(
        StatusBar::new(state.current_message(), state.editor.tags().len(), theme),
        status_area,
    );
    frame.render_widget(HelpBar::new(&state.hints, theme), help_area);

    match state.mode {
        Mode::Help => frame.render_widget(HelpOverlay::new(theme), area),
        Mode::Notice => {
            if let Some(notice) = &state.notice {
                frame.render_widget(
                    NoticeDialog::new(notice, theme).title("Invalid expression"),
                    area,
                );
            }
        }
        Mode::Normal => {}
    }
}
