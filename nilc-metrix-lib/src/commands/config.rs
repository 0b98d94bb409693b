use crate::Result;
use crate::analyzer::ScriptAnalyzer;
use crate::metrics::CatalogVersion;
use crate::server::Settings;
use camino::{Utf8Path, Utf8PathBuf};
use core::net::SocketAddr;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "nilc-metrix.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    #[serde(default)]
    pub catalog_version: CatalogVersion,

    /// Word ceiling for the metric pages and the API
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Word ceiling for the sentence ranking page
    #[serde(default = "default_ranking_max_words")]
    pub ranking_max_words: usize,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palavras_key: Option<String>,

    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub palavras: PalavrasConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    #[serde(default = "default_program")]
    pub program: Utf8PathBuf,

    #[serde(default = "default_script_dir")]
    pub script_dir: Utf8PathBuf,

    #[serde(default = "default_analyzer_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Profiles that requests may select
    #[serde(default = "default_profiles")]
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    #[serde(default = "default_ranking_url")]
    pub url: String,

    #[serde(default = "default_remote_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Analyzer profile used for each sentence
    #[serde(default = "default_ranking_profile")]
    pub profile: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PalavrasConfig {
    #[serde(default = "default_palavras_url")]
    pub url: String,

    #[serde(default = "default_remote_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

const fn default_listen() -> SocketAddr {
    SocketAddr::new(core::net::IpAddr::V4(core::net::Ipv4Addr::UNSPECIFIED), 8080)
}

const fn default_max_words() -> usize {
    2000
}

const fn default_ranking_max_words() -> usize {
    1000
}

const fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_program() -> Utf8PathBuf {
    Utf8PathBuf::from("python3")
}

fn default_script_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("/opt/text_metrics")
}

const fn default_analyzer_timeout() -> Duration {
    Duration::from_mins(5)
}

fn default_profiles() -> Vec<String> {
    Vec::from(["_all", "port", "cmp", "50", "156", "_min"].map(String::from))
}

fn default_ranking_url() -> String {
    "http://localhost:5000/api/v1/ranking/ranking3f".to_string()
}

const fn default_remote_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_ranking_profile() -> String {
    "_all".to_string()
}

fn default_palavras_url() -> String {
    "http://palavras:8080".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `nilc-metrix.toml` in `base_dir` is used when it exists.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.to_path_buf(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            bail!("max_words must be greater than zero");
        }

        if self.ranking_max_words == 0 {
            bail!("ranking_max_words must be greater than zero");
        }

        if self.max_body_bytes == 0 {
            bail!("max_body_bytes must be greater than zero");
        }

        if self.analyzer.timeout.is_zero() {
            bail!("analyzer.timeout must be greater than zero");
        }

        if self.analyzer.profiles.is_empty() {
            bail!("analyzer.profiles must list at least one profile");
        }

        for profile in &self.analyzer.profiles {
            if profile.is_empty() || !profile.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                bail!("invalid analyzer profile '{profile}': only letters, digits, and '_' are allowed");
            }
        }

        if !self.analyzer.profiles.contains(&self.ranking.profile) {
            bail!("ranking.profile '{}' is not one of analyzer.profiles", self.ranking.profile);
        }

        let _ = self.ranking_url()?;
        let _ = self.palavras_url()?;

        Ok(())
    }

    pub fn ranking_url(&self) -> Result<Url> {
        Url::parse(&self.ranking.url).into_app_err_with(|| format!("invalid ranking.url '{}'", self.ranking.url))
    }

    pub fn palavras_url(&self) -> Result<Url> {
        Url::parse(&self.palavras.url).into_app_err_with(|| format!("invalid palavras.url '{}'", self.palavras.url))
    }

    #[must_use]
    pub fn analyzer(&self) -> ScriptAnalyzer {
        ScriptAnalyzer::new(
            self.analyzer.program.clone(),
            self.analyzer.script_dir.clone(),
            self.analyzer.timeout,
            self.analyzer.profiles.clone(),
        )
    }

    #[must_use]
    pub fn server_settings(&self) -> Settings {
        Settings {
            max_words: self.max_words,
            ranking_max_words: self.ranking_max_words,
            max_body_bytes: self.max_body_bytes,
            api_key: self.api_key.clone(),
            palavras_key: self.palavras_key.clone(),
            ranking_profile: self.ranking.profile.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            catalog_version: CatalogVersion::default(),
            max_words: default_max_words(),
            ranking_max_words: default_ranking_max_words(),
            max_body_bytes: default_max_body_bytes(),
            api_key: None,
            palavras_key: None,
            analyzer: AnalyzerConfig::default(),
            ranking: RankingConfig::default(),
            palavras: PalavrasConfig::default(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            script_dir: default_script_dir(),
            timeout: default_analyzer_timeout(),
            profiles: default_profiles(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            url: default_ranking_url(),
            timeout: default_remote_timeout(),
            profile: default_ranking_profile(),
        }
    }
}

impl Default for PalavrasConfig {
    fn default() -> Self {
        Self {
            url: default_palavras_url(),
            timeout: default_remote_timeout(),
        }
    }
}
