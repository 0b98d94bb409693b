use crate::upstream::UpstreamError;
use core::fmt::Debug;
use core::time::Duration;
use futures::future::BoxFuture;
use ohno::{IntoAppError, app_err};
use url::Url;

const LOG_TARGET: &str = "   ranking";

/// The remote model that scores sentence feature vectors.
pub trait Ranker: Send + Sync + Debug {
    /// Sends a batch of feature objects (a bracketed, comma-separated list) and returns the raw score strings.
    fn rank<'a>(&'a self, batch: &'a str) -> BoxFuture<'a, Result<Vec<String>, UpstreamError>>;
}

/// Talks to the ranking model over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRanker {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl HttpRanker {
    pub fn new(url: Url, timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nilc-metrix/", env!("CARGO_PKG_VERSION")))
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { client, url, timeout })
    }

    async fn post(&self, batch: &str) -> Result<Vec<String>, UpstreamError> {
        log::debug!(target: LOG_TARGET, "Sending {} bytes of features to {}", batch.len(), self.url);

        // the deadline covers reading the body as well as the headers
        let exchange = async {
            let response = self
                .client
                .post(self.url.clone())
                .header(reqwest::header::CONTENT_TYPE, "text")
                .body(batch.to_string())
                .send()
                .await
                .into_app_err_with(|| format!("could not reach the ranking service at {}", self.url))?;

            let status = response.status();
            let body = response.text().await.into_app_err("could not read the ranking service response")?;
            Ok::<_, ohno::AppError>((status, body))
        };

        let Ok(result) = tokio::time::timeout(self.timeout, exchange).await else {
            log::warn!(target: LOG_TARGET, "Ranking service at {} timed out after {:?}", self.url, self.timeout);
            return Err(UpstreamError::Timeout {
                service: "ranking service",
                after: self.timeout,
            });
        };

        let (status, body) = result?;
        if !status.is_success() {
            return Err(app_err!("ranking service returned {status}: {}", body.trim()).into());
        }

        log::debug!(target: LOG_TARGET, "Ranking service answered: {}", body.trim());
        Ok(body.split(',').map(|v| v.trim().to_string()).collect())
    }
}

impl Ranker for HttpRanker {
    fn rank<'a>(&'a self, batch: &'a str) -> BoxFuture<'a, Result<Vec<String>, UpstreamError>> {
        Box::pin(self.post(batch))
    }
}
