//! Invoking the external analyzer and turning its output into results.
//!
//! The analyzer is a black box that prints a `++`-delimited list of `key:value` tokens. [`parse`] extracts
//! the raw pairs, and [`analyze_text`] runs the whole pipeline for one text: invoke the analyzer, parse, and
//! assemble the pairs into a sorted [`ResultSet`] against the catalog.

mod parser;
mod runner;
mod text;

pub use parser::parse;
pub use runner::{Analyzer, ScriptAnalyzer};
pub use text::{sanitize, word_count};

use crate::metrics::Catalog;
use crate::results::{ResultSet, SourceFilter, assemble};
use crate::upstream::UpstreamError;

/// The outcome of analyzing one text.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The analyzer's output, exactly as printed.
    pub raw: String,
    pub results: ResultSet,
}

/// Runs `profile` over `text` and assembles the output into results.
///
/// Analyzer failures are returned as-is; malformed output only ever degrades to fewer results.
pub async fn analyze_text(
    analyzer: &dyn Analyzer,
    catalog: &Catalog,
    profile: &str,
    text: &str,
    filter: Option<&SourceFilter>,
) -> Result<Analysis, UpstreamError> {
    let raw = analyzer.analyze(profile, text).await?;
    let results = assemble(catalog, parse(&raw), filter);
    Ok(Analysis { raw, results })
}


#[cfg(test)]
mod tests {
    use super::testing::FakeAnalyzer;
    use super::*;
    use crate::metrics::{CatalogVersion, MetricSource};

    #[tokio::test]
    async fn test_analyze_text() {
        let analyzer = FakeAnalyzer::replying([Ok("ignored_prefix++flesch:72.3,words:150,unknown_key:5")]);
        let catalog = Catalog::new(CatalogVersion::Current);

        let analysis = analyze_text(&analyzer, &catalog, "_all", "Um texto.", None).await.unwrap();
        assert_eq!(analysis.raw, "ignored_prefix++flesch:72.3,words:150,unknown_key:5");
        let keys: Vec<_> = analysis.results.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, ["unknown_key", "words", "flesch"]);
        assert_eq!(analyzer.calls.lock().unwrap()[0], ("_all".to_string(), "Um texto.".to_string()));
    }

    #[tokio::test]
    async fn test_analyze_text_filtered() {
        let analyzer = FakeAnalyzer::replying([Ok("++flesch:72.3,brunet:10,unknown_key:5")]);
        let catalog = Catalog::new(CatalogVersion::Current);
        let filter = SourceFilter::only(MetricSource::Cmp);

        let analysis = analyze_text(&analyzer, &catalog, "port", "Um texto.", Some(&filter)).await.unwrap();
        assert_eq!(analysis.results.len(), 1);
        assert_eq!(analysis.results.items()[0].key, "flesch");
    }

    #[tokio::test]
    async fn test_analyze_text_propagates_failure() {
        let analyzer = FakeAnalyzer::replying([Err("boom")]);
        let catalog = Catalog::new(CatalogVersion::Current);

        let err = analyze_text(&analyzer, &catalog, "_all", "Um texto.", None).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Failed(_)));
    }

    #[tokio::test]
    async fn test_analyze_text_empty_output() {
        let analyzer = FakeAnalyzer::replying([Ok("Traceback: something went wrong")]);
        let catalog = Catalog::new(CatalogVersion::Current);

        let analysis = analyze_text(&analyzer, &catalog, "_all", "Um texto.", None).await.unwrap();
        assert!(analysis.results.is_empty());
    }
}
