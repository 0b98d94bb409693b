use crate::metrics::{MetricDefinition, MetricLevel, MetricSource};
use compact_str::CompactString;

/// Outcome of looking a key up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(MetricDefinition),

    /// The key is not in the catalog. The item is still reported, with empty metadata.
    Unresolved,
}

/// A raw pair enriched with catalog metadata and its final position in a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// 1-based position, assigned after sorting.
    pub index: usize,
    pub key: CompactString,
    pub value: CompactString,
    pub resolution: Resolution,
}

impl ResultItem {
    #[must_use]
    pub const fn definition(&self) -> Option<&MetricDefinition> {
        match &self.resolution {
            Resolution::Resolved(def) => Some(def),
            Resolution::Unresolved => None,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }

    /// Class label, or the empty string for an unknown key.
    #[must_use]
    pub fn class(&self) -> &'static str {
        self.definition().map_or("", |d| d.class)
    }

    #[must_use]
    pub fn source(&self) -> Option<MetricSource> {
        self.definition().map(|d| d.source)
    }

    #[must_use]
    pub fn level(&self) -> Option<MetricLevel> {
        self.definition().and_then(|d| d.level)
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.definition().map_or("", |d| d.description)
    }

    /// Source tag as text, or the empty string for an unknown key.
    #[must_use]
    pub fn source_tag(&self) -> &'static str {
        self.source().map_or("", MetricSource::as_str)
    }

    /// Level name as text, or the empty string when the key is unknown or the catalog has no levels.
    #[must_use]
    pub fn level_name(&self) -> &'static str {
        self.level().map_or("", <&'static str>::from)
    }
}

/// An ordered sequence of result items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: Vec<ResultItem>,
}

impl ResultSet {
    #[must_use]
    pub(crate) const fn from_sorted(items: Vec<ResultItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ResultItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultItem;
    type IntoIter = core::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
