//! Integration tests driving the command-line entry point.

use camino::Utf8PathBuf;
use nilc_metrix_lib::Host;
use std::io::{Cursor, Read, Write};

/// Test host that captures output to in-memory buffers.
#[derive(Debug, Default)]
struct TestHost {
    input_buf: Vec<u8>,
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn input(&mut self) -> impl Read {
        Cursor::new(&self.input_buf)
    }

    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_init_then_validate() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = Utf8PathBuf::try_from(temp_dir.path().join("nilc-metrix.toml")).unwrap();

    let mut host = TestHost::default();
    nilc_metrix_lib::run(&mut host, ["nilc-metrix", "init", config_path.as_str()])
        .await
        .expect("init should succeed");
    assert!(config_path.exists());

    let mut host = TestHost::default();
    nilc_metrix_lib::run(&mut host, ["nilc-metrix", "validate", "--config", config_path.as_str()])
        .await
        .expect("validate should succeed");

    let output = host.output_str();
    assert!(output.contains("Configuration file is valid"), "unexpected output: {output}");
    assert!(output.contains("Listening on: 0.0.0.0:8080"));
    assert_eq!(host.exit_code, None);
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
async fn test_validate_reports_failure() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = Utf8PathBuf::try_from(temp_dir.path().join("broken.toml")).unwrap();
    std::fs::write(&config_path, "max_words = 0\n").unwrap();

    let mut host = TestHost::default();
    let result = nilc_metrix_lib::run(&mut host, ["nilc-metrix", "validate", "--config", config_path.as_str()]).await;

    assert!(result.is_err());
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("max_words must be greater than zero"));
}

#[tokio::test]
async fn test_catalog_json() {
    let mut host = TestHost::default();
    nilc_metrix_lib::run(
        &mut host,
        ["nilc-metrix", "catalog", "--catalog-version", "legacy", "--source", "gtn", "--format", "json"],
    )
    .await
    .expect("catalog should succeed");

    let records: serde_json::Value = serde_json::from_str(&host.output_str()).expect("valid JSON");
    let records = records.as_array().expect("an array");
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r["source"] == "GTN"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_analyze_csv_from_stdin() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    std::fs::write(root.join("run_all.py"), "printf '++words:4,flesch:80.1'\n").unwrap();

    let config_path = root.join("nilc-metrix.toml");
    std::fs::write(
        &config_path,
        format!("catalog_version = \"legacy\"\n\n[analyzer]\nprogram = \"sh\"\nscript_dir = \"{root}\"\nprofiles = [\"_all\"]\n"),
    )
    .unwrap();

    let mut host = TestHost {
        input_buf: b"Era uma vez.".to_vec(),
        ..TestHost::default()
    };
    nilc_metrix_lib::run(
        &mut host,
        ["nilc-metrix", "--config", config_path.as_str(), "analyze", "--format", "csv"],
    )
    .await
    .expect("analyze should succeed");

    let output = host.output_str();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "Index,Class,Source,Level,Metric,Value,Description");
    assert!(lines[1].starts_with("1,Basic Counts,CMP,"));
    assert!(lines[1].contains(",words,4,"));
    assert!(lines[2].starts_with("2,Classic Formulas,CMP,"));
    assert!(lines[2].contains(",flesch,80.1,"));
}
