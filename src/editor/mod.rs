//! Tag sequence editor
//!
//! The editor is the core of the formula widget. A front end feeds it
//! text-field changes, key presses and clicks, and reads back the chips and
//! suggestions to draw.
//!
//! ```
//! use tagcalc::editor::{EditorKey, FormulaEditor};
//!
//! let mut editor = FormulaEditor::default();
//! for c in "cogs".chars() {
//!     editor.push_char(c);
//! }
//! editor.handle_key(EditorKey::Enter);
//! editor.push_char('*');
//! editor.on_input_change("2");
//!
//! let labels: Vec<&str> = editor.chips().iter().map(|c| c.label()).collect();
//! assert_eq!(labels, ["COGS Headcount", "*"]);
//! assert_eq!(editor.free_text(), "2");
//! ```

mod keystroke;
mod state;
mod view;

pub use keystroke::{Keystroke, classify_keystroke};
pub use state::{EditorKey, FormulaEditor, KeyOutcome};
pub use view::{ChipView, SuggestionView};
