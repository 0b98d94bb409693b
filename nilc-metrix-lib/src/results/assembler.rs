use super::{RawPair, Resolution, ResultItem, ResultSet, SourceFilter};
use crate::metrics::Catalog;
use std::collections::HashMap;

const LOG_TARGET: &str = " assembler";

/// Turns raw analyzer pairs into a sorted, indexed result set.
///
/// Each pair is resolved against `catalog`; unknown keys are kept with empty metadata. When a key appears
/// more than once, the last occurrence wins. With a `filter`, only resolved items from allowed sources
/// remain. Items are then ordered by class and key (byte-wise, so unresolved items with their empty class
/// come first) and numbered from 1.
#[must_use]
pub fn assemble(catalog: &Catalog, pairs: impl IntoIterator<Item = RawPair>, filter: Option<&SourceFilter>) -> ResultSet {
    let mut positions: HashMap<_, usize> = HashMap::new();
    let mut items: Vec<ResultItem> = Vec::new();

    for pair in pairs {
        let resolution = catalog.lookup(&pair.key).map_or(Resolution::Unresolved, Resolution::Resolved);
        let item = ResultItem {
            index: 0,
            key: pair.key,
            value: pair.value,
            resolution,
        };

        if let Some(&pos) = positions.get(&item.key) {
            log::debug!(target: LOG_TARGET, "Metric '{}' reported more than once, keeping the last value", item.key);
            items[pos] = item;
        } else {
            let _ = positions.insert(item.key.clone(), items.len());
            items.push(item);
        }
    }

    if let Some(filter) = filter {
        items.retain(|item| filter.allows(item.source()));
    }

    items.sort_by(|a, b| a.class().cmp(b.class()).then_with(|| a.key.cmp(&b.key)));

    for (i, item) in items.iter_mut().enumerate() {
        item.index = i + 1;
    }

    ResultSet::from_sorted(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{CatalogVersion, MetricSource};

    fn pairs(tokens: &[(&str, &str)]) -> Vec<RawPair> {
        tokens
            .iter()
            .enumerate()
            .map(|(i, (k, v))| RawPair::new(i, *k, *v))
            .collect()
    }

    fn keys(set: &ResultSet) -> Vec<&str> {
        set.iter().map(|item| item.key.as_str()).collect()
    }

    #[test]
    fn test_sorts_by_class_then_key() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let set = assemble(
            &catalog,
            pairs(&[("flesch", "72.3"), ("words", "150"), ("unknown_key", "5"), ("sentences", "10")]),
            None,
        );

        assert_eq!(keys(&set), ["unknown_key", "sentences", "words", "flesch"]);
        assert_eq!(set.iter().map(|i| i.index).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_keys_keep_their_values() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let set = assemble(&catalog, pairs(&[("unknown_key", "5")]), None);

        let item = &set.items()[0];
        assert!(!item.is_resolved());
        assert_eq!(item.value, "5");
        assert_eq!(item.class(), "");
        assert_eq!(item.source_tag(), "");
        assert_eq!(item.level_name(), "");
        assert_eq!(item.description(), "");
    }

    #[test]
    fn test_empty_key_is_kept_unresolved() {
        use crate::analyzer::parse;

        let catalog = Catalog::new(CatalogVersion::Current);
        let set = assemble(&catalog, parse("++words:10,:3"), None);

        assert_eq!(keys(&set), ["", "words"]);
        assert!(!set.items()[0].is_resolved());
        assert_eq!(set.items()[0].value, "3");
    }

    #[test]
    fn test_filter_drops_other_sources_and_unknown_keys() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let filter = SourceFilter::only(MetricSource::Cmp);
        let set = assemble(
            &catalog,
            pairs(&[("flesch", "72.3"), ("brunet", "11.2"), ("unknown_key", "5"), ("words", "150")]),
            Some(&filter),
        );

        assert_eq!(keys(&set), ["words", "flesch"]);
        assert_eq!(set.items()[1].index, 2);
    }

    #[test]
    fn test_duplicate_keys_keep_last_value() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let set = assemble(&catalog, pairs(&[("words", "150"), ("flesch", "70"), ("words", "151")]), None);

        assert_eq!(set.len(), 2);
        assert_eq!(set.items()[0].key, "words");
        assert_eq!(set.items()[0].value, "151");
    }

    #[test]
    fn test_legacy_version_orders_by_legacy_class() {
        let catalog = Catalog::new(CatalogVersion::Legacy);
        let set = assemble(&catalog, pairs(&[("flesch", "72.3"), ("yngve", "3"), ("words", "150")]), None);

        // "Basic Counts" < "Classic Formulas" < "z"
        assert_eq!(keys(&set), ["words", "flesch", "yngve"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let catalog = Catalog::new(CatalogVersion::Current);
        let first = assemble(&catalog, pairs(&[("verbs", "0.2"), ("adverbs", "0.1"), ("ttr", "0.6"), ("x", "1")]), None);
        let again = assemble(
            &catalog,
            first.iter().enumerate().map(|(i, item)| RawPair::new(i, item.key.clone(), item.value.clone())),
            None,
        );

        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_input() {
        let catalog = Catalog::new(CatalogVersion::Current);
        assert!(assemble(&catalog, Vec::new(), None).is_empty());
    }
}
