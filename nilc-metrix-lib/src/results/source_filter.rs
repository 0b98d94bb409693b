use crate::metrics::MetricSource;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use std::collections::BTreeSet;

/// Restricts a result set to metrics defined by a set of families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    allowed: BTreeSet<MetricSource>,
}

impl SourceFilter {
    #[must_use]
    pub fn new(sources: impl IntoIterator<Item = MetricSource>) -> Self {
        Self {
            allowed: sources.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn only(source: MetricSource) -> Self {
        Self::new([source])
    }

    /// Whether an item with this source passes. Items with no source never pass.
    #[must_use]
    pub fn allows(&self, source: Option<MetricSource>) -> bool {
        source.is_some_and(|s| self.allowed.contains(&s))
    }

    pub fn sources(&self) -> impl Iterator<Item = MetricSource> + '_ {
        self.allowed.iter().copied()
    }
}

impl FromStr for SourceFilter {
    type Err = String;

    /// Parses a comma-separated list such as `CMP,GTN`.
    fn from_str(s: &str) -> Result<Self, String> {
        let mut allowed = BTreeSet::new();
        for tag in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let Ok(source) = MetricSource::from_str(tag) else {
                return Err(format!("unknown metric source '{tag}'"));
            };
            let _ = allowed.insert(source);
        }

        if allowed.is_empty() {
            return Err("at least one metric source must be given".to_string());
        }

        Ok(Self { allowed })
    }
}

impl Display for SourceFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, source) in self.allowed.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{source}")?;
        }
        Ok(())
    }
}
