//! Per-sentence difficulty ranking.
//!
//! A text is split into sentences by a [`Segmenter`]. Each sentence is analyzed on its own and its results
//! are rendered in compact form; the compact objects are sent as one batch to a [`Ranker`], which answers
//! with one score per sentence. Scores become a [`Difficulty`] percentage with a color band.
//!
//! Sentences are analyzed one after the other. Any failure aborts the whole batch: a partial ranking is
//! never reported.

mod client;
mod difficulty;
mod segmenter;

pub use client::{HttpRanker, Ranker};
pub use difficulty::{Difficulty, DifficultyBand};
pub use segmenter::{RuleSegmenter, Segmenter};

use crate::analyzer::{Analyzer, analyze_text};
use crate::metrics::Catalog;
use crate::reports::generate_compact;
use crate::upstream::UpstreamError;
use ohno::{IntoAppError, app_err};
use serde::Serialize;

const LOG_TARGET: &str = "   ranking";

/// One sentence with its difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSentence {
    /// 1-based position of the sentence in the text.
    pub index: usize,
    pub sentence: String,
    pub difficulty: Difficulty,
}

/// The collaborators needed to rank a text.
#[derive(Debug, Clone, Copy)]
pub struct RankingContext<'a> {
    pub analyzer: &'a dyn Analyzer,
    pub catalog: &'a Catalog,
    pub segmenter: &'a dyn Segmenter,
    pub ranker: &'a dyn Ranker,

    /// Analyzer profile used for every sentence.
    pub profile: &'a str,
}

/// Ranks every sentence of `text` by difficulty.
pub async fn rank_text(ctx: RankingContext<'_>, text: &str) -> Result<Vec<RankedSentence>, UpstreamError> {
    let sentences = ctx.segmenter.sentences(text);
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let mut features = Vec::with_capacity(sentences.len());
    for sentence in &sentences {
        let analysis = analyze_text(ctx.analyzer, ctx.catalog, ctx.profile, sentence, None).await?;
        let mut compact = String::new();
        generate_compact(analysis.results.items(), &mut compact)?;
        features.push(compact);
    }

    let batch = format!("[{}]", features.join(","));
    log::debug!(target: LOG_TARGET, "Ranking {} sentences", sentences.len());

    let scores = ctx.ranker.rank(&batch).await?;
    if scores.len() != sentences.len() {
        return Err(app_err!("ranking service returned {} scores for {} sentences", scores.len(), sentences.len()).into());
    }

    sentences
        .into_iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (sentence, score))| -> Result<RankedSentence, UpstreamError> {
            let score = score
                .parse::<f64>()
                .into_app_err_with(|| format!("ranking service returned an invalid score '{score}'"))?;
            Ok(RankedSentence {
                index: i + 1,
                sentence,
                difficulty: Difficulty::from_score(score),
            })
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::testing::FakeRanker;
    use super::*;
    use crate::analyzer::testing::FakeAnalyzer;
    use crate::metrics::CatalogVersion;

    fn context<'a>(analyzer: &'a FakeAnalyzer, catalog: &'a Catalog, ranker: &'a FakeRanker) -> RankingContext<'a> {
        RankingContext {
            analyzer,
            catalog,
            segmenter: &RuleSegmenter,
            ranker,
            profile: "_all",
        }
    }

    #[tokio::test]
    async fn test_rank_text() {
        let analyzer = FakeAnalyzer::replying([Ok("++flesch:70,words:3"), Ok("++words:5,unknown_key:1")]);
        let catalog = Catalog::new(CatalogVersion::Current);
        let ranker = FakeRanker::scoring(&["0.2", "0.8"]);

        let ranked = rank_text(context(&analyzer, &catalog, &ranker), "O gato dormiu. O cão latiu muito alto.")
            .await
            .unwrap();

        assert_eq!(ranker.batches.lock().unwrap()[0], r#"[{"words":3,"flesch":70},{"unknown_key":1,"words":5}]"#);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].sentence, "O gato dormiu.");
        assert_eq!(ranked[0].difficulty.percent, 20);
        assert_eq!(ranked[0].difficulty.band, DifficultyBand::Green);
        assert_eq!(ranked[1].index, 2);
        assert_eq!(ranked[1].difficulty.band, DifficultyBand::Red);

        let calls = analyzer.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], ("_all".to_string(), "O cão latiu muito alto.".to_string()));
    }

    #[tokio::test]
    async fn test_sentence_failure_aborts_batch() {
        let analyzer = FakeAnalyzer::replying([Ok("++words:3"), Err("analyzer crashed")]);
        let catalog = Catalog::new(CatalogVersion::Current);
        let ranker = FakeRanker::scoring(&["0.2", "0.8"]);

        let err = rank_text(context(&analyzer, &catalog, &ranker), "Um. Dois.").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Failed(_)));
        assert!(ranker.batches.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_score_count_mismatch() {
        let analyzer = FakeAnalyzer::replying([Ok("++words:3"), Ok("++words:4")]);
        let catalog = Catalog::new(CatalogVersion::Current);
        let ranker = FakeRanker::scoring(&["0.2"]);

        let err = rank_text(context(&analyzer, &catalog, &ranker), "Um. Dois.").await.unwrap_err();
        assert!(err.to_string().contains("1 scores for 2 sentences"));
    }

    #[tokio::test]
    async fn test_invalid_score() {
        let analyzer = FakeAnalyzer::replying([Ok("++words:3")]);
        let catalog = Catalog::new(CatalogVersion::Current);
        let ranker = FakeRanker::scoring(&["high"]);

        let err = rank_text(context(&analyzer, &catalog, &ranker), "Um.").await.unwrap_err();
        assert!(err.to_string().contains("invalid score 'high'"));
    }

    #[tokio::test]
    async fn test_empty_text_skips_ranker() {
        let analyzer = FakeAnalyzer::default();
        let catalog = Catalog::new(CatalogVersion::Current);
        let ranker = FakeRanker::scoring(&[]);

        let ranked = rank_text(context(&analyzer, &catalog, &ranker), "   ").await.unwrap();
        assert!(ranked.is_empty());
        assert!(ranker.batches.lock().unwrap().is_empty());
        assert!(analyzer.calls.lock().unwrap().is_empty());
    }
}
