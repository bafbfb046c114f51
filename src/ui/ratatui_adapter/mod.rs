//! Ratatui-based terminal front end
//!
//! Presents the formula editor as a full-screen TUI: committed tags are
//! drawn as chips above the text field, the matching suggestions below it,
//! and the last calculation at the bottom.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              FormulaApp                  │
//! │      (terminal setup, draw/poll loop)    │
//! └────────────────────┬─────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │  (editor)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
pub mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{FormulaApp, render};
pub use events::{EventResult, handle_event};
pub use state::{AppState, ClickTarget, Hitboxes, Mode, StatusMessage};
pub use theme::Theme;
