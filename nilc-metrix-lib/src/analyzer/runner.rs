use crate::upstream::UpstreamError;
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::Debug;
use core::time::Duration;
use futures::future::BoxFuture;
use ohno::{IntoAppError, app_err};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

const LOG_TARGET: &str = "  analyzer";

/// The external engine that computes raw metric values for a text.
pub trait Analyzer: Send + Sync + Debug {
    /// Whether `profile` names a script variant this analyzer may run.
    fn supports(&self, profile: &str) -> bool;

    /// Runs the analyzer over `text` and returns its raw output.
    fn analyze<'a>(&'a self, profile: &'a str, text: &'a str) -> BoxFuture<'a, Result<String, UpstreamError>>;
}

/// Runs the Python metric scripts as child processes.
///
/// Each profile maps to a script named `run{profile}.py` inside the script directory. The script is started
/// directly (no shell) with the sanitized text as its single argument, and its standard output is the result.
#[derive(Debug, Clone)]
pub struct ScriptAnalyzer {
    program: Utf8PathBuf,
    script_dir: Utf8PathBuf,
    timeout: Duration,
    profiles: Vec<String>,
}

impl ScriptAnalyzer {
    #[must_use]
    pub fn new(program: impl Into<Utf8PathBuf>, script_dir: impl Into<Utf8PathBuf>, timeout: Duration, profiles: Vec<String>) -> Self {
        Self {
            program: program.into(),
            script_dir: script_dir.into(),
            timeout,
            profiles,
        }
    }

    #[must_use]
    pub fn script_path(&self, profile: &str) -> Utf8PathBuf {
        self.script_dir.join(format!("run{profile}.py"))
    }

    #[must_use]
    pub fn program(&self) -> &Utf8Path {
        &self.program
    }

    async fn run(&self, profile: &str, text: &str) -> Result<String, UpstreamError> {
        if !self.supports(profile) {
            return Err(app_err!("unknown analyzer profile '{profile}'").into());
        }

        let script = self.script_path(profile);
        let sanitized = super::sanitize(text);
        let start = Instant::now();

        let child = Command::new(self.program.as_std_path())
            .arg(script.as_std_path())
            .arg(&sanitized)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .into_app_err_with(|| format!("could not start '{} {script}'", self.program))?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.into_app_err_with(|| format!("'{script}' failed to run"))?,
            Err(_) => {
                log::warn!(target: LOG_TARGET, "Profile '{profile}' timed out after {:?}", self.timeout);
                return Err(UpstreamError::Timeout {
                    service: "analyzer",
                    after: self.timeout,
                });
            }
        };

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            log::debug!(target: LOG_TARGET, "Profile '{profile}' wrote to stderr: {}", stderr.trim());
        }

        if !output.status.success() {
            log::warn!(target: LOG_TARGET, "Profile '{profile}' exited with {}", output.status);
            return Err(app_err!("'{script}' exited with {}: {}", output.status, stderr.trim()).into());
        }

        log::debug!(target: LOG_TARGET, "Profile '{profile}' finished in {:.3}s", start.elapsed().as_secs_f64());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Analyzer for ScriptAnalyzer {
    fn supports(&self, profile: &str) -> bool {
        self.profiles.iter().any(|p| p == profile)
    }

    fn analyze<'a>(&'a self, profile: &'a str, text: &'a str) -> BoxFuture<'a, Result<String, UpstreamError>> {
        Box::pin(self.run(profile, text))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    fn analyzer_with_script(dir: &tempfile::TempDir, body: &str, timeout: Duration) -> ScriptAnalyzer {
        fs::write(dir.path().join("run_all.py"), body).unwrap();
        let script_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        ScriptAnalyzer::new("sh", script_dir, timeout, vec!["_all".to_string()])
    }

    #[tokio::test]
    async fn test_returns_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer_with_script(&dir, "printf '++ words:3,text:%s, ++' \"$1\"\n", Duration::from_secs(10));

        let output = analyzer.analyze("_all", "Oi, tudo bem!").await.unwrap();
        assert_eq!(output, "++ words:3,text:Oi, tudo bem{{exclamation}}, ++");
    }

    #[tokio::test]
    async fn test_rejects_unknown_profile() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer_with_script(&dir, "echo", Duration::from_secs(10));

        assert!(!analyzer.supports("../etc"));
        let err = analyzer.analyze("../etc", "texto").await.unwrap_err();
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("unknown analyzer profile"));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer_with_script(&dir, "echo broken >&2\nexit 3\n", Duration::from_secs(10));

        let err = analyzer.analyze("_all", "texto").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Failed(_)));
        assert!(err.to_string().contains("broken"));
    }

    #[tokio::test]
    async fn test_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer_with_script(&dir, "sleep 5\n", Duration::from_millis(100));

        let err = analyzer.analyze("_all", "texto").await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_script_path() {
        let analyzer = ScriptAnalyzer::new("python3", "/opt/text_metrics", Duration::from_secs(1), vec![]);
        assert_eq!(analyzer.script_path("port").as_str(), "/opt/text_metrics/runport.py");
        assert_eq!(analyzer.program().as_str(), "python3");
    }
}
