//! Ratatui widgets for the formula editor TUI

mod formula_input;
mod help_bar;
mod help_overlay;
mod notice_dialog;
mod result_panel;
mod status_bar;
mod suggestion_list;

pub use formula_input::{ChipSlot, FormulaInput, layout_chips};
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use notice_dialog::NoticeDialog;
pub use result_panel::ResultPanel;
pub use status_bar::StatusBar;
pub use suggestion_list::SuggestionList;
