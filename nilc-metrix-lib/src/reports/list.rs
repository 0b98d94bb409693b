use crate::Result;
use crate::results::ResultSet;
use core::fmt::Write;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListRecord<'a> {
    index: usize,
    class: &'a str,
    source: &'a str,
    level: &'a str,
    key: &'a str,
    value: &'a str,
    description: &'a str,
}

/// Renders a result set as a JSON array of records, one per metric, in the set's order.
pub fn generate<W: Write>(results: &ResultSet, writer: &mut W) -> Result<()> {
    let records: Vec<_> = results
        .iter()
        .map(|item| ListRecord {
            index: item.index,
            class: item.class(),
            source: item.source_tag(),
            level: item.level_name(),
            key: &item.key,
            value: &item.value,
            description: item.description(),
        })
        .collect();

    write!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parse;
    use crate::metrics::{Catalog, CatalogVersion};
    use crate::results::assemble;

    #[test]
    fn test_records() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let results = assemble(&catalog, parse("++flesch:72.3,unknown_key:5"), None);

        let mut output = String::new();
        generate(&results, &mut output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json[0]["index"], 1);
        assert_eq!(json[0]["key"], "unknown_key");
        assert_eq!(json[0]["class"], "");
        assert_eq!(json[1]["index"], 2);
        assert_eq!(json[1]["class"], "Índices de leiturabilidade");
        assert_eq!(json[1]["source"], "CMP");
        assert_eq!(json[1]["level"], "text");
        assert_eq!(json[1]["value"], "72.3");
        assert_eq!(json[1]["description"], "Índice Flesch");
    }

    #[test]
    fn test_empty() {
        let mut output = String::new();
        generate(&ResultSet::default(), &mut output).unwrap();
        assert_eq!(output, "[]");
    }
}
