use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// Granularity at which a metric is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetricLevel {
    Text,
    Paragraph,
    Sentence,
    Word,
}
