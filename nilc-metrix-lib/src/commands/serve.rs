use super::Host;
use super::common::GlobalArgs;
use super::config::Config;
use crate::Result;
use crate::metrics::Catalog;
use crate::ranking::{HttpRanker, RuleSegmenter};
use crate::server::{self, AppState, PalavrasClient};
use clap::Parser;
use core::net::SocketAddr;
use ohno::IntoAppError;
use std::io::Write;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on, overriding the configuration
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<SocketAddr>,
}

pub async fn serve<H: Host>(host: &mut H, global: &GlobalArgs, args: &ServeArgs) -> Result<()> {
    let config = global.load_config()?;
    let state = build_state(&config)?;

    let addr = args.listen.unwrap_or(config.listen);
    let listener = TcpListener::bind(addr).await.into_app_err_with(|| format!("binding to {addr}"))?;

    let local = listener.local_addr().into_app_err("reading the listener address")?;
    let _ = writeln!(host.output(), "Serving NILC-Metrix on http://{local}");

    server::serve(listener, Arc::new(state)).await
}

/// Wires the configured collaborators into the state shared by the request handlers.
pub fn build_state(config: &Config) -> Result<AppState> {
    Ok(AppState {
        catalog: Catalog::new(config.catalog_version),
        analyzer: Arc::new(config.analyzer()),
        ranker: Arc::new(HttpRanker::new(config.ranking_url()?, config.ranking.timeout)?),
        segmenter: Arc::new(RuleSegmenter),
        palavras: PalavrasClient::new(config.palavras_url()?, config.palavras.timeout)?,
        settings: config.server_settings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CatalogVersion;

    #[test]
    fn test_build_state_from_defaults() {
        let state = build_state(&Config::default()).unwrap();
        assert_eq!(state.catalog.version(), CatalogVersion::Current);
        assert_eq!(state.catalog.len(), 200);
        assert!(state.analyzer.supports("port"));
        assert!(!state.analyzer.supports("bogus"));
        assert_eq!(state.settings.max_words, 2000);
        assert_eq!(state.settings.ranking_max_words, 1000);
    }

    #[test]
    fn test_build_state_legacy_catalog() {
        let config = Config {
            catalog_version: CatalogVersion::Legacy,
            ..Config::default()
        };
        let state = build_state(&config).unwrap();
        assert_eq!(state.catalog.lookup("flesch").unwrap().class, "Classic Formulas");
    }

    #[test]
    fn test_build_state_rejects_bad_url() {
        let mut config = Config::default();
        config.palavras.url = "no scheme".to_string();
        assert!(build_state(&config).is_err());
    }
}
