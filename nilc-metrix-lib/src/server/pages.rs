use super::error::{ServiceError, TEXT_TOO_BIG};
use super::{AppState, render};
use crate::analyzer::{analyze_text, word_count};
use crate::metrics::MetricSource;
use crate::ranking::rank_text;
use crate::reports::{MetricsPage, RankingPage, generate_index, generate_metric_doc, generate_metrics_page, generate_ranking_page};
use crate::results::SourceFilter;
use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;
use std::sync::Arc;

const RANKING_TEXT_TOO_BIG: &str = "Text is too big. / Texto muito longo.";

/// The text area submitted by every tool page.
#[derive(Debug, Default, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

/// A page that runs one analyzer profile and shows the results as a table.
#[derive(Debug)]
struct MetricsTool {
    title: &'static str,
    subtitle: &'static str,
    action: &'static str,
    profile: &'static str,
    source: Option<MetricSource>,
}

const NILC_METRIX: MetricsTool = MetricsTool {
    title: "NILC-Metrix",
    subtitle: "Todas as métricas de complexidade textual",
    action: "/nilcmetrix",
    profile: "_all",
    source: None,
};

const COH_METRIX_PORT: MetricsTool = MetricsTool {
    title: "Coh-Metrix-Port",
    subtitle: "Métricas do Coh-Metrix adaptadas para o português",
    action: "/cohmetrixport",
    profile: "port",
    source: Some(MetricSource::Cmp),
};

pub async fn index() -> Result<Html<String>, ServiceError> {
    Ok(Html(render(generate_index)?))
}

pub async fn metric_doc(State(state): State<Arc<AppState>>) -> Result<Html<String>, ServiceError> {
    Ok(Html(render(|w| generate_metric_doc(&state.catalog, w))?))
}

pub async fn nilc_metrix(State(state): State<Arc<AppState>>, Form(form): Form<TextForm>) -> Result<Html<String>, ServiceError> {
    metrics_page(&state, &NILC_METRIX, &form.text).await
}

pub async fn coh_metrix_port(State(state): State<Arc<AppState>>, Form(form): Form<TextForm>) -> Result<Html<String>, ServiceError> {
    metrics_page(&state, &COH_METRIX_PORT, &form.text).await
}

async fn metrics_page(state: &AppState, tool: &MetricsTool, text: &str) -> Result<Html<String>, ServiceError> {
    let mut message = None;
    let mut results = None;

    if !text.is_empty() {
        if word_count(text) > state.settings.max_words {
            message = Some(TEXT_TOO_BIG);
        } else {
            let filter = tool.source.map(SourceFilter::only);
            let analysis = analyze_text(state.analyzer.as_ref(), &state.catalog, tool.profile, text, filter.as_ref()).await?;
            results = Some(analysis.results);
        }
    }

    let page = MetricsPage {
        title: tool.title,
        subtitle: tool.subtitle,
        action: tool.action,
        text,
        message,
        results: results.as_ref(),
    };

    Ok(Html(render(|w| generate_metrics_page(&page, w))?))
}

pub async fn simpligo_ranking(State(state): State<Arc<AppState>>, Form(form): Form<TextForm>) -> Result<Html<String>, ServiceError> {
    let text = form.text.as_str();
    let mut message = None;
    let mut sentences = None;

    if !text.is_empty() {
        if word_count(text) > state.settings.ranking_max_words {
            message = Some(RANKING_TEXT_TOO_BIG);
        } else {
            sentences = Some(rank_text(state.ranking_context(), text).await?);
        }
    }

    let page = RankingPage {
        action: "/simpligo-ranking",
        text,
        message,
        sentences: sentences.as_deref(),
    };

    Ok(Html(render(|w| generate_ranking_page(&page, w))?))
}

pub async fn health() -> &'static str {
    "OK"
}
