//! The static metric catalog.
//!
//! Every metric the external analyzer can emit is described by one row of a static table (see
//! `metric_def.rs`). A row records the metric's wire key, the family ([`MetricSource`]) that defined it, its
//! class, the granularity ([`MetricLevel`]) at which it is computed, and a Portuguese description.
//!
//! The table is exposed through a [`Catalog`], which indexes it by key for one [`CatalogVersion`]:
//! - **Current**: Portuguese class labels ([`MetricCategory`]) plus a level per metric
//! - **Legacy**: the original English class labels, with unclassified metrics under `z`
//!
//! Both versions are views over the same rows, so they always agree on key coverage and sources.

mod catalog;
mod metric_category;
mod metric_def;
mod metric_level;
mod metric_source;

pub use catalog::{Catalog, CatalogVersion, MetricDefinition};
pub use metric_category::MetricCategory;
pub use metric_level::MetricLevel;
pub use metric_source::MetricSource;

#[cfg(any(debug_assertions, test))]
pub use metric_def::{METRIC_DEFINITIONS, MetricDef};
