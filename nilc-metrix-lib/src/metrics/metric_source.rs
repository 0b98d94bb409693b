use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The metric family that defined a metric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, EnumString, IntoStaticStr, ValueEnum, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPERCASE")]
pub enum MetricSource {
    Cmp,
    Cmd,
    Gtn,
    Aic,
    Rts,
    Liw,
}

impl MetricSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cmp => "CMP",
            Self::Cmd => "CMD",
            Self::Gtn => "GTN",
            Self::Aic => "AIC",
            Self::Rts => "RTS",
            Self::Liw => "LIW",
        }
    }

    /// Human-readable name of the family.
    #[must_use]
    pub const fn family_name(self) -> &'static str {
        match self {
            Self::Cmp => "Coh-Metrix-Port",
            Self::Cmd => "Coh-Metrix-Dementia",
            Self::Gtn => "New metrics",
            Self::Aic => "AIC syntactic metrics",
            Self::Rts => "Reading-time word frequencies",
            Self::Liw => "LIWC sentiment lexicon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_matches_wire_tag() {
        for source in MetricSource::iter() {
            assert_eq!(source.to_string(), source.as_str());
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("cmp".parse::<MetricSource>().unwrap(), MetricSource::Cmp);
        assert_eq!("Liw".parse::<MetricSource>().unwrap(), MetricSource::Liw);
        let _ = "XYZ".parse::<MetricSource>().unwrap_err();
    }

    #[test]
    fn test_value_enum_uses_wire_tag() {
        assert_eq!(MetricSource::Aic.to_possible_value().unwrap().get_name(), "AIC");
        assert_eq!(<MetricSource as ValueEnum>::from_str("gtn", true).unwrap(), MetricSource::Gtn);
    }

    #[test]
    fn test_serde_uses_wire_tag() {
        assert_eq!(serde_json::to_string(&MetricSource::Gtn).unwrap(), "\"GTN\"");
    }
}
