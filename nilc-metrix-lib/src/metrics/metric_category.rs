use strum::{Display, EnumIter, IntoStaticStr};

/// Class label of a metric in the current catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum MetricCategory {
    #[strum(serialize = "Ambiguidade")]
    Ambiguity,
    #[strum(serialize = "Coesão referencial")]
    ReferentialCohesion,
    #[strum(serialize = "Complexidade sintática")]
    SyntacticComplexity,
    #[strum(serialize = "Conectivos")]
    Connectives,
    #[strum(serialize = "Contagens básicas")]
    BasicCounts,
    #[strum(serialize = "Diversidade léxica")]
    LexicalDiversity,
    #[strum(serialize = "Frequência de palavras")]
    WordFrequency,
    #[strum(serialize = "Hiperonímia")]
    Hypernymy,
    #[strum(serialize = "Índices de leiturabilidade")]
    Readability,
    #[strum(serialize = "Informações morfossintáticas de palavras")]
    Morphosyntax,
    #[strum(serialize = "Medidas psicolinguísticas")]
    Psycholinguistics,
    #[strum(serialize = "Modelo de linguagem")]
    LanguageModel,
    #[strum(serialize = "Operadores lógicos")]
    LogicOperators,
    #[strum(serialize = "Semântica latente")]
    LatentSemantics,
    #[strum(serialize = "Sentimento")]
    Sentiment,
}

impl MetricCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels_are_unique() {
        let labels: std::collections::HashSet<_> = MetricCategory::iter().map(MetricCategory::label).collect();
        assert_eq!(labels.len(), MetricCategory::iter().count());
    }

    #[test]
    fn test_label_matches_display() {
        assert_eq!(MetricCategory::Readability.label(), "Índices de leiturabilidade");
        assert_eq!(MetricCategory::BasicCounts.to_string(), "Contagens básicas");
    }
}
