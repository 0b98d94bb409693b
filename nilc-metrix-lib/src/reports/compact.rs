use crate::Result;
use crate::results::ResultItem;
use core::fmt::Write;

/// Renders items as a flat `{"key":value,...}` object.
///
/// Items are written in the order given. Values are emitted exactly as the analyzer printed them, without
/// quoting or escaping, so the output is only valid JSON when the analyzer's values are valid literals.
pub fn generate<W: Write>(items: &[ResultItem], writer: &mut W) -> Result<()> {
    write!(writer, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "\"{}\":{}", item.key, item.value)?;
    }
    write!(writer, "}}")?;
    Ok(())
}
