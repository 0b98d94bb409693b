//! The HTTP front end.
//!
//! One [`axum`] router serves both the HTML tool pages and the JSON API. Handlers share an immutable
//! [`AppState`]; each external collaborator sits behind a trait object so the router runs the same way
//! against the real analyzer and ranking model or against in-process stand-ins.
//!
//! Every text is checked against its word ceiling before any external call is made.

mod api;
mod error;
mod pages;
mod palavras;

pub use api::{ApiFormat, MetrixQuery};
pub use error::{ServiceError, TEXT_TOO_BIG};
pub use palavras::{PalavrasClient, ParseFormat};

use crate::Result;
use crate::analyzer::{Analyzer, word_count};
use crate::metrics::Catalog;
use crate::ranking::{Ranker, RankingContext, Segmenter};
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use ohno::IntoAppError;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;

const LOG_TARGET: &str = "    server";

/// Limits and credentials the handlers enforce.
#[derive(Debug, Clone)]
pub struct Settings {
    pub max_words: usize,
    pub ranking_max_words: usize,
    pub max_body_bytes: usize,

    /// Key required by the metrics API. When unset, every API request is refused.
    pub api_key: Option<String>,

    /// Key required by the parsing proxy. When unset, every proxy request is refused.
    pub palavras_key: Option<String>,

    /// Analyzer profile used for each sentence of a ranking request.
    pub ranking_profile: String,
}

/// Everything a request handler can reach.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub analyzer: Arc<dyn Analyzer>,
    pub ranker: Arc<dyn Ranker>,
    pub segmenter: Arc<dyn Segmenter>,
    pub palavras: PalavrasClient,
    pub settings: Settings,
}

impl AppState {
    #[must_use]
    pub fn ranking_context(&self) -> RankingContext<'_> {
        RankingContext {
            analyzer: self.analyzer.as_ref(),
            catalog: &self.catalog,
            segmenter: self.segmenter.as_ref(),
            ranker: self.ranker.as_ref(),
            profile: &self.settings.ranking_profile,
        }
    }
}

/// Builds the service's routes over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.settings.max_body_bytes;

    Router::new()
        .route("/", get(pages::index))
        .route("/metrixdoc", get(pages::metric_doc))
        .route("/nilcmetrix", get(pages::nilc_metrix).post(pages::nilc_metrix))
        .route("/cohmetrixport", get(pages::coh_metrix_port).post(pages::coh_metrix_port))
        .route("/simpligo-ranking", get(pages::simpligo_ranking).post(pages::simpligo_ranking))
        .route("/api/v1/metrix/{subset}/{key}", post(api::metrix))
        .route("/api/v1/palavras/{ret_type}/{key}", get(api::palavras).post(api::palavras))
        .route("/health", get(pages::health))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}

/// Serves requests on `listener` until Ctrl-C is pressed.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    let addr = listener.local_addr().into_app_err("reading the listener address")?;
    log::info!(target: LOG_TARGET, "Listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_app_err("serving HTTP requests")?;

    log::info!(target: LOG_TARGET, "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!(target: LOG_TARGET, "Could not listen for the shutdown signal: {e:#}");
        core::future::pending::<()>().await;
    }
    log::info!(target: LOG_TARGET, "Shutdown requested, draining in-flight requests");
}

fn key_matches(expected: Option<&str>, given: &str) -> bool {
    expected.is_some_and(|key| key == given)
}

fn check_word_limit(text: &str, max_words: usize) -> core::result::Result<(), ServiceError> {
    if word_count(text) > max_words {
        return Err(ServiceError::TextTooLarge);
    }
    Ok(())
}

fn render(generate: impl FnOnce(&mut String) -> Result<()>) -> Result<String> {
    let mut out = String::new();
    generate(&mut out)?;
    Ok(out)
}
