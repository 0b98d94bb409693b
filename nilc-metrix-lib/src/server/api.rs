use super::error::ServiceError;
use super::palavras::ParseFormat;
use super::{AppState, check_word_limit, key_matches, render};
use crate::analyzer::analyze_text;
use crate::reports::{generate_compact, generate_csv, generate_list};
use crate::results::SourceFilter;
use axum::extract::{Form, Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::Arc;

/// Response formats of the metrics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFormat {
    /// Compact `{"key":value}` object.
    #[default]
    Json,

    /// The analyzer's output, verbatim.
    Plain,
    List,
    Csv,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetrixQuery {
    #[serde(default)]
    pub format: ApiFormat,

    /// Comma-separated source tags to keep, such as `CMP,GTN`.
    pub sources: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PalavrasForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub options: String,
}

/// `POST /api/v1/metrix/{subset}/{key}` with the raw text as the body.
pub async fn metrix(
    State(state): State<Arc<AppState>>,
    Path((subset, key)): Path<(String, String)>,
    Query(query): Query<MetrixQuery>,
    text: String,
) -> Result<Response, ServiceError> {
    if !key_matches(state.settings.api_key.as_deref(), &key) {
        return Err(ServiceError::Forbidden);
    }

    let profile = if subset == "all" { "_all" } else { subset.as_str() };
    if !state.analyzer.supports(profile) {
        return Err(ServiceError::UnknownProfile(subset));
    }

    let filter = query
        .sources
        .as_deref()
        .map(str::parse::<SourceFilter>)
        .transpose()
        .map_err(ServiceError::InvalidSources)?;

    check_word_limit(&text, state.settings.max_words)?;

    let analysis = analyze_text(state.analyzer.as_ref(), &state.catalog, profile, &text, filter.as_ref()).await?;

    let (content_type, body) = match query.format {
        ApiFormat::Json => ("application/json", render(|w| generate_compact(analysis.results.items(), w))?),
        ApiFormat::Plain => ("text/plain; charset=utf-8", analysis.raw),
        ApiFormat::List => ("application/json", render(|w| generate_list(&analysis.results, w))?),
        ApiFormat::Csv => ("text/csv; charset=utf-8", render(|w| generate_csv(&analysis.results, w))?),
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// `/api/v1/palavras/{ret_type}/{key}`, proxied to the parsing service.
pub async fn palavras(
    State(state): State<Arc<AppState>>,
    Path((ret_type, key)): Path<(String, String)>,
    Form(form): Form<PalavrasForm>,
) -> Result<Response, ServiceError> {
    let Ok(format) = ret_type.parse::<ParseFormat>() else {
        return Err(ServiceError::UnknownReturnType(ret_type));
    };

    if !key_matches(state.settings.palavras_key.as_deref(), &key) {
        return Err(ServiceError::Forbidden);
    }

    let (status, body) = state.palavras.parse(format, &form.content, &form.options).await?;
    Ok((status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}
