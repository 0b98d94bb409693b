use crate::results::RawPair;

const MARKER: &str = "++";

/// Extracts the `key:value` pairs from an analyzer's output.
///
/// The analyzer prints its metrics between `++` markers as a comma-separated list. Anything before the
/// first marker is noise. Output without a marker yields no pairs. Tokens without a `:` are skipped. The key
/// is the text before the first `:` and may be empty; the value is the text between the first and second
/// `:`. A pair's rank is the position of its token in the list, skipped tokens included.
#[must_use]
pub fn parse(output: &str) -> Vec<RawPair> {
    let mut segments = output.split(MARKER);
    let _ = segments.next();
    let Some(body) = segments.next() else {
        return Vec::new();
    };

    body.trim()
        .split(',')
        .enumerate()
        .filter_map(|(rank, token)| {
            let mut parts = token.split(':');
            let key = parts.next()?;
            let value = parts.next()?;
            Some(RawPair::new(rank, key, value))
        })
        .collect()
}
