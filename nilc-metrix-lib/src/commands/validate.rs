use super::Host;
use super::config::{Config, DEFAULT_CONFIG_FILE};
use crate::Result;
use camino::Utf8Path;
use std::io::Write;

/// Loads and checks a configuration file, reporting the outcome on the host.
pub fn validate_config<H: Host>(host: &mut H, config_path: Option<&Utf8Path>) -> Result<()> {
    validate_in(host, Utf8Path::new("."), config_path)
}

fn validate_in<H: Host>(host: &mut H, base_dir: &Utf8Path, config_path: Option<&Utf8Path>) -> Result<()> {
    match Config::load(base_dir, config_path) {
        Ok(config) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            let default_path = base_dir.join(DEFAULT_CONFIG_FILE);
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else if default_path.exists() {
                let _ = writeln!(host.output(), "Config file: {default_path}");
            } else {
                let _ = writeln!(host.output(), "Using default configuration (no config file found)");
            }

            let _ = writeln!(host.output(), "Listening on: {}", config.listen);
            let _ = writeln!(
                host.output(),
                "Analyzer: {} {} ({})",
                config.analyzer.program,
                config.analyzer.script_dir,
                config.analyzer.profiles.join(", ")
            );
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
