//! Eval command - evaluate a raw arithmetic expression

use crate::TagcalcError;
use crate::eval;
use crate::ui::OutputWriter;

type Result<T> = std::result::Result<T, TagcalcError>;

/// Execute the eval command
///
/// # Errors
/// Returns `EvalError` if the expression is malformed.
pub fn execute(expression: &str, output: &dyn OutputWriter) -> Result<f64> {
    let total = eval::evaluate(expression).inspect_err(|e| {
        log::warn!("invalid expression '{expression}': {e}");
    })?;
    output.write(&total.to_string());
    Ok(total)
}
