//! Calc command - calculate a formula given as tags

use crate::TagcalcError;
use crate::catalog::{Catalog, Tag};
use crate::eval::{Calculator, Evaluation};
use crate::ui::OutputWriter;

type Result<T> = std::result::Result<T, TagcalcError>;

/// Resolve command-line tokens into tags
///
/// # Errors
/// Returns `CatalogError::UnknownTag` for the first token that is neither an
/// operand, a catalog key nor a decimal number.
pub fn resolve_tokens(catalog: &Catalog, tokens: &[String]) -> Result<Vec<Tag>> {
    tokens
        .iter()
        .map(|token| catalog.resolve(token.trim()).map_err(Into::into))
        .collect()
}

/// Execute the calc command
///
/// # Errors
/// Returns an error if a token cannot be resolved, the expression is
/// malformed, or JSON output fails.
pub fn execute(
    catalog: &Catalog,
    tokens: &[String],
    json: bool,
    output: &dyn OutputWriter,
) -> Result<Evaluation> {
    let tags = resolve_tokens(catalog, tokens)?;
    let evaluation = Calculator::new().calculate(&tags)?;

    if json {
        output.write(&serde_json::to_string_pretty(&evaluation)?);
    } else {
        output.write(&format!(
            "{} = {}",
            evaluation.expression_text, evaluation.total
        ));
    }

    Ok(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::eval::EvalError;
    use crate::ui::{BufferedWriter, MessageLevel};

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_calc_with_catalog_keys() {
        let output = BufferedWriter::new();
        let evaluation = execute(
            &Catalog::reference(),
            &tokens(&["cogs headcount", "SUM", "2", "*", "Payroll Bonus G&A"]),
            false,
            &output,
        )
        .unwrap();

        assert_eq!(evaluation.expression_text, "7000 + 2 * 2000");
        assert_eq!(evaluation.total, 11000.0);
        assert_eq!(
            output.lines(MessageLevel::Normal),
            ["7000 + 2 * 2000 = 11000"]
        );
    }

    #[test]
    fn test_calc_json() {
        let output = BufferedWriter::new();
        execute(
            &Catalog::reference(),
            &tokens(&["(", "1", "+", "2", ")", "^", "2"]),
            true,
            &output,
        )
        .unwrap();

        let printed = output.lines(MessageLevel::Normal).join("\n");
        let value: serde_json::Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(value["expression_text"], "( 1 + 2 ) ^ 2");
        assert_eq!(value["total"], 9.0);
    }

    #[test]
    fn test_unknown_token() {
        let catalog = Catalog::reference();
        let output = BufferedWriter::new();
        let err = execute(&catalog, &tokens(&["Revenue"]), false, &output).unwrap_err();
        assert!(matches!(
            err,
            TagcalcError::Catalog(CatalogError::UnknownTag(ref t)) if t == "Revenue"
        ));
        assert!(output.messages().is_empty());
    }

    #[test]
    fn test_malformed_expression() {
        let catalog = Catalog::reference();
        let output = BufferedWriter::new();
        let err = execute(&catalog, &tokens(&["2", "+"]), false, &output).unwrap_err();
        assert!(matches!(
            err,
            TagcalcError::Eval(EvalError::UnexpectedEnd { .. })
        ));
    }
}
