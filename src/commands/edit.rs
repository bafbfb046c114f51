//! Edit command - run the interactive formula editor

use crate::TagcalcError;
use crate::catalog::Catalog;
use crate::editor::FormulaEditor;
use crate::ui::{FormulaApp, OutputWriter};
use std::time::Duration;

type Result<T> = std::result::Result<T, TagcalcError>;

/// Execute the edit command
///
/// After the editor closes, the last successful calculation is printed so
/// it stays visible once the alternate screen is gone.
///
/// # Errors
/// Returns `UiError` if the terminal cannot be driven.
pub fn execute(catalog: Catalog, message_ttl: Duration, output: &dyn OutputWriter) -> Result<()> {
    let calculator = FormulaApp::new().run(FormulaEditor::new(catalog), message_ttl)?;

    if calculator.is_valid() {
        let summary = format!("{} = {}", calculator.expression_text(), calculator.total());
        output.write(&summary);
    } else {
        output.info("No formula calculated");
    }
    Ok(())
}
