use super::metric_def::{METRIC_DEFINITIONS, MetricDef};
use super::{MetricLevel, MetricSource};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use strum::Display;

/// Selects which class labels the catalog reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, ValueEnum, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CatalogVersion {
    /// Portuguese class labels with a granularity level per metric.
    #[default]
    Current,

    /// The original English class labels, without levels.
    Legacy,
}

/// Metadata for one metric, as seen through a particular catalog version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    pub key: &'static str,
    pub source: MetricSource,
    pub class: &'static str,
    pub level: Option<MetricLevel>,
    pub description: &'static str,
}

impl MetricDefinition {
    fn from_def(def: &'static MetricDef, version: CatalogVersion) -> Self {
        match version {
            CatalogVersion::Current => Self {
                key: def.key,
                source: def.source,
                class: def.category.label(),
                level: Some(def.level),
                description: def.description,
            },
            CatalogVersion::Legacy => Self {
                key: def.key,
                source: def.source,
                class: def.legacy_class,
                level: None,
                description: def.description,
            },
        }
    }
}

/// Read-only registry mapping metric keys to their metadata.
///
/// A catalog is built once at startup and shared for the life of the process. Lookups are exact: keys are
/// compared byte for byte, with no case folding or trimming.
#[derive(Debug)]
pub struct Catalog {
    version: CatalogVersion,
    index: HashMap<&'static str, &'static MetricDef>,
}

impl Catalog {
    #[must_use]
    pub fn new(version: CatalogVersion) -> Self {
        let index = METRIC_DEFINITIONS.iter().map(|def| (def.key, def)).collect();
        Self { version, index }
    }

    #[must_use]
    pub const fn version(&self) -> CatalogVersion {
        self.version
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MetricDefinition> {
        self.index.get(key).map(|def| MetricDefinition::from_def(def, self.version))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All definitions, in table order.
    pub fn definitions(&self) -> impl Iterator<Item = MetricDefinition> + '_ {
        METRIC_DEFINITIONS
            .iter()
            .map(|def| MetricDefinition::from_def(def, self.version))
    }

    /// Definitions grouped by class, with classes and the keys within each class in byte-wise order.
    #[must_use]
    pub fn group_by_class(&self) -> Vec<(&'static str, Vec<MetricDefinition>)> {
        let mut groups: BTreeMap<&'static str, Vec<MetricDefinition>> = BTreeMap::new();
        for def in self.definitions() {
            groups.entry(def.class).or_default().push(def);
        }

        groups
            .into_iter()
            .map(|(class, mut defs)| {
                defs.sort_unstable_by_key(|d| d.key);
                (class, defs)
            })
            .collect()
    }

    pub fn keys_for_source(&self, source: MetricSource) -> impl Iterator<Item = &'static str> + '_ {
        self.definitions().filter(move |d| d.source == source).map(|d| d.key)
    }
}
