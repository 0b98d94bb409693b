use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use core::time::Duration;
use ohno::IntoAppError;
use strum::{Display, EnumString};
use url::Url;

const LOG_TARGET: &str = "  palavras";

/// Output formats offered by the PALAVRAS parsing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ParseFormat {
    TigerXml,
    Flat,
}

/// Forwards parse requests to the PALAVRAS service.
#[derive(Debug, Clone)]
pub struct PalavrasClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl PalavrasClient {
    pub fn new(base_url: Url, timeout: Duration) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nilc-metrix/", env!("CARGO_PKG_VERSION")))
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { client, base_url, timeout })
    }

    #[must_use]
    pub fn endpoint(&self, format: ParseFormat) -> String {
        format!("{}/palavras/{format}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Sends `sentence` to the parser and returns the upstream status and body untouched.
    pub async fn parse(&self, format: ParseFormat, sentence: &str, options: &str) -> Result<(StatusCode, String), UpstreamError> {
        let endpoint = self.endpoint(format);
        log::debug!(target: LOG_TARGET, "Forwarding {} bytes to {endpoint}", sentence.len());

        let exchange = async {
            let response = self
                .client
                .post(&endpoint)
                .form(&[("sentence", sentence), ("options", options)])
                .send()
                .await
                .into_app_err_with(|| format!("could not reach the parsing service at {endpoint}"))?;

            let status = response.status();
            let body = response.text().await.into_app_err("could not read the parsing service response")?;
            Ok::<_, ohno::AppError>((status, body))
        };

        let Ok(result) = tokio::time::timeout(self.timeout, exchange).await else {
            log::warn!(target: LOG_TARGET, "Parsing service at {endpoint} timed out after {:?}", self.timeout);
            return Err(UpstreamError::Timeout {
                service: "parsing service",
                after: self.timeout,
            });
        };

        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("tigerxml".parse::<ParseFormat>().unwrap(), ParseFormat::TigerXml);
        assert_eq!("flat".parse::<ParseFormat>().unwrap(), ParseFormat::Flat);
        assert!("xml".parse::<ParseFormat>().is_err());
        assert!("FLAT".parse::<ParseFormat>().is_err());
        assert_eq!(ParseFormat::TigerXml.to_string(), "tigerxml");
    }

    #[tokio::test]
    async fn test_timeout_covers_stalled_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n<corpus>").await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = PalavrasClient::new(Url::parse(&format!("http://{addr}")).unwrap(), Duration::from_millis(200)).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), client.parse(ParseFormat::Flat, "Olá", ""))
            .await
            .expect("the client should give up on its own");

        let err = result.unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "parsing service timed out after 200ms");
        server.abort();
    }

    #[test]
    fn test_endpoint() {
        let client = PalavrasClient::new(Url::parse("http://palavras:8080/").unwrap(), Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(ParseFormat::Flat), "http://palavras:8080/palavras/flat");
        assert_eq!(client.endpoint(ParseFormat::TigerXml), "http://palavras:8080/palavras/tigerxml");
    }
}
