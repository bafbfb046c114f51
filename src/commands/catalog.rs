//! Catalog command - list suggestions for a query

use crate::TagcalcError;
use crate::catalog::{Catalog, Tag};
use crate::suggest;
use crate::ui::OutputWriter;

type Result<T> = std::result::Result<T, TagcalcError>;

fn entry_line(tag: &Tag) -> String {
    format!("{} = {}", tag.key(), tag.value())
}

/// Execute the catalog command
///
/// Prints the entries matching `query` in catalog order. With `ranked`, the
/// entries that do not match follow the matches.
///
/// # Errors
/// Currently infallible; returns `Result` for consistency with other commands.
pub fn execute(
    catalog: &Catalog,
    query: Option<&str>,
    ranked: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let query = query.unwrap_or_default();
    let matching = suggest::matching(catalog, query);

    if matching.is_empty() {
        output.info(&format!("No suggestions match '{query}'"));
    } else {
        output.info(&format!(
            "{} of {} suggestion(s) match:",
            matching.len(),
            catalog.len()
        ));
        for tag in &matching {
            output.write(&entry_line(tag));
        }
    }

    if ranked {
        let rest: Vec<&Tag> = suggest::rank(catalog, query)
            .into_iter()
            .skip(matching.len())
            .collect();
        if !rest.is_empty() {
            output.info("Not matching:");
            for tag in rest {
                output.write(&entry_line(tag));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{BufferedWriter, MessageLevel};

    #[test]
    fn test_matching_only() {
        let output = BufferedWriter::new();
        execute(&Catalog::reference(), Some("headcount"), false, &output).unwrap();

        assert_eq!(
            output.lines(MessageLevel::Normal),
            ["COGS Headcount = 7000", "S&M Headcount = 10000"]
        );
        assert_eq!(
            output.lines(MessageLevel::Info),
            ["2 of 11 suggestion(s) match:"]
        );
    }

    #[test]
    fn test_ranked_lists_everything() {
        let output = BufferedWriter::new();
        execute(&Catalog::reference(), Some("g&a"), true, &output).unwrap();

        let lines = output.lines(MessageLevel::Normal);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Payroll Bonus G&A = 2000");
        assert_eq!(lines[1], "Contractors G&A = 8000");
        assert_eq!(lines[2], "Payment Processing Fees = 1000");
    }

    #[test]
    fn test_no_query_lists_catalog() {
        let output = BufferedWriter::new();
        execute(&Catalog::reference(), None, false, &output).unwrap();
        assert_eq!(output.lines(MessageLevel::Normal).len(), 11);
        assert_eq!(output.lines(MessageLevel::Normal)[2], "SUM = +");
    }

    #[test]
    fn test_nothing_matches() {
        let output = BufferedWriter::new();
        execute(&Catalog::reference(), Some("zzz"), false, &output).unwrap();
        assert!(output.lines(MessageLevel::Normal).is_empty());
        assert_eq!(
            output.lines(MessageLevel::Info),
            ["No suggestions match 'zzz'"]
        );
    }
}
