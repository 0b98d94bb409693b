use compact_str::CompactString;

/// One unresolved `key:value` token from analyzer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    /// Position of the token within the analyzer's comma-separated list.
    pub rank: usize,
    pub key: CompactString,
    /// The literal value text, never interpreted.
    pub value: CompactString,
}

impl RawPair {
    #[must_use]
    pub fn new(rank: usize, key: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            rank,
            key: key.into(),
            value: value.into(),
        }
    }
}
