use serde::Serialize;
use strum::{Display, IntoStaticStr};

/// Color band of a difficulty percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DifficultyBand {
    Green,
    Orange,
    DarkOrange,
    Red,
}

impl DifficultyBand {
    #[must_use]
    pub const fn for_percent(percent: i64) -> Self {
        if percent < 26 {
            Self::Green
        } else if percent < 51 {
            Self::Orange
        } else if percent < 76 {
            Self::DarkOrange
        } else {
            Self::Red
        }
    }

    /// CSS color name used when rendering the band.
    #[must_use]
    pub fn color(self) -> &'static str {
        self.into()
    }
}

/// How hard a sentence is to read, as scored by the ranking model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Difficulty {
    /// The model's score scaled to a percentage and truncated toward zero.
    pub percent: i64,
    pub band: DifficultyBand,
}

impl Difficulty {
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "scores are fractions, truncation is the intended rounding")]
    pub fn from_score(score: f64) -> Self {
        let percent = (score * 100.0).trunc() as i64;
        Self {
            percent,
            band: DifficultyBand::for_percent(percent),
        }
    }
}
