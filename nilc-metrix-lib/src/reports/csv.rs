use crate::Result;
use crate::results::ResultSet;
use core::fmt::Write;
use std::borrow::Cow;

/// Renders a result set as a CSV table with a header row.
pub fn generate<W: Write>(results: &ResultSet, writer: &mut W) -> Result<()> {
    writeln!(writer, "Index,Class,Source,Level,Metric,Value,Description")?;

    for item in results {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            item.index,
            escape_csv(item.class()),
            item.source_tag(),
            item.level_name(),
            escape_csv(&item.key),
            escape_csv(&item.value),
            escape_csv(item.description())
        )?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parse;
    use crate::metrics::{Catalog, CatalogVersion};
    use crate::results::assemble;

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_rows() {
        let catalog = Catalog::new(CatalogVersion::Legacy);
        let results = assemble(&catalog, parse("++words:150,unknown_key:5"), None);

        let mut output = String::new();
        generate(&results, &mut output).unwrap();
        assert_eq!(
            output,
            "Index,Class,Source,Level,Metric,Value,Description\n\
             1,,,,unknown_key,5,\n\
             2,Basic Counts,CMP,,words,150,Quantidade de Palavras no texto\n"
        );
    }
}
