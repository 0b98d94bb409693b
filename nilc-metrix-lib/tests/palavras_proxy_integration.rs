//! Integration tests for the parsing-service proxy route using wiremock

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use core::time::Duration;
use nilc_metrix_lib::analyzer::ScriptAnalyzer;
use nilc_metrix_lib::metrics::{Catalog, CatalogVersion};
use nilc_metrix_lib::ranking::{HttpRanker, RuleSegmenter};
use nilc_metrix_lib::server::{AppState, PalavrasClient, Settings, router};
use std::sync::Arc;
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn state(palavras_url: &str, palavras_timeout: Duration) -> Arc<AppState> {
    let unused = Url::parse("http://127.0.0.1:9/ranking").expect("valid URL");
    Arc::new(AppState {
        catalog: Catalog::new(CatalogVersion::Current),
        analyzer: Arc::new(ScriptAnalyzer::new("python3", "/nonexistent", Duration::from_secs(1), vec!["_all".to_string()])),
        ranker: Arc::new(HttpRanker::new(unused, Duration::from_secs(1)).expect("client should build")),
        segmenter: Arc::new(RuleSegmenter),
        palavras: PalavrasClient::new(Url::parse(palavras_url).expect("valid mock URL"), palavras_timeout).expect("client should build"),
        settings: Settings {
            max_words: 2000,
            ranking_max_words: 1000,
            max_body_bytes: 1024 * 1024,
            api_key: Some("metrix-key".to_string()),
            palavras_key: Some("parse-key".to_string()),
            ranking_profile: "_all".to_string(),
        },
    })
}

async fn post_form(state: Arc<AppState>, uri: &str, form: &str) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("valid request");

    let response = router(state).oneshot(request).await.expect("router never fails");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("readable body");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn test_forwards_form_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/palavras/tigerxml"))
        .and(body_string("sentence=Ol%C3%A1+mundo&options=--tiger"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<corpus>Olá mundo</corpus>"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = post_form(
        state(&server.uri(), Duration::from_secs(5)),
        "/api/v1/palavras/tigerxml/parse-key",
        "content=Ol%C3%A1+mundo&options=--tiger",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<corpus>Olá mundo</corpus>");
}

#[tokio::test]
async fn test_passes_upstream_status_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/palavras/flat"))
        .respond_with(ResponseTemplate::new(422).set_body_string("empty sentence"))
        .mount(&server)
        .await;

    let (status, body) = post_form(state(&server.uri(), Duration::from_secs(5)), "/api/v1/palavras/flat/parse-key", "content=").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "empty sentence");
}

#[tokio::test]
async fn test_wrong_key_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, _) = post_form(state(&server.uri(), Duration::from_secs(5)), "/api/v1/palavras/flat/metrix-key", "content=x").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_upstream_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/palavras/flat"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let (status, body) = post_form(state(&server.uri(), Duration::from_millis(100)), "/api/v1/palavras/flat/parse-key", "content=x").await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body, "Error parsing service timed out after 100ms");
}
