use crate::Result;
use crate::results::ResultSet;
use core::fmt::Write;
use owo_colors::OwoColorize;

const UNKNOWN_CLASS_LABEL: &str = "(unknown metrics)";

/// Renders a result set for the terminal, one block per class.
pub fn generate<W: Write>(results: &ResultSet, use_colors: bool, writer: &mut W) -> Result<()> {
    let key_width = results.iter().map(|item| item.key.chars().count()).max().unwrap_or(0);
    let mut current_class: Option<&str> = None;

    for item in results {
        let class = item.class();
        if current_class != Some(class) {
            if current_class.is_some() {
                writeln!(writer)?;
            }

            let label = if class.is_empty() { UNKNOWN_CLASS_LABEL } else { class };
            if use_colors {
                writeln!(writer, "{}", label.bold())?;
            } else {
                writeln!(writer, "{label}")?;
            }
            current_class = Some(class);
        }

        let source = item.source_tag();
        let key = item.key.as_str();
        if use_colors {
            write!(writer, "  {:>3}  {key:<key_width$} : {}", item.index, item.value.as_str().cyan())?;
            if !source.is_empty() {
                write!(writer, "  {}", source.dimmed())?;
            }
        } else {
            write!(writer, "  {:>3}  {key:<key_width$} : {}", item.index, item.value)?;
            if !source.is_empty() {
                write!(writer, "  {source}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parse;
    use crate::metrics::{Catalog, CatalogVersion};
    use crate::results::assemble;

    fn render(output: &str, use_colors: bool) -> String {
        let catalog = Catalog::new(CatalogVersion::Current);
        let results = assemble(&catalog, parse(output), None);
        let mut s = String::new();
        generate(&results, use_colors, &mut s).unwrap();
        s
    }

    #[test]
    fn test_groups_by_class() {
        let output = render("++flesch:72.3,words:150,sentences:10,mystery:1", false);
        assert_eq!(
            output,
            "(unknown metrics)\n\
             \x20   1  mystery   : 1\n\
             \n\
             Contagens básicas\n\
             \x20   2  sentences : 10  CMP\n\
             \x20   3  words     : 150  CMP\n\
             \n\
             Índices de leiturabilidade\n\
             \x20   4  flesch    : 72.3  CMP\n"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(render("", false), "");
    }

    #[test]
    fn test_colors() {
        let output = render("++words:150", true);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("words"));
    }
}
