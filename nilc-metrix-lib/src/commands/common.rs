//! Options and setup shared by every command.

use super::config::Config;
use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to configuration file (default is `nilc-metrix.toml`)
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output (default is `info` for `serve`, `none` otherwise)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

impl GlobalArgs {
    /// Loads the configuration named by `--config`, or the default file in the current directory.
    pub fn load_config(&self) -> Result<Config> {
        Config::load(Utf8Path::new("."), self.config.as_deref())
    }

    #[must_use]
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                use std::io::{IsTerminal, stdout};
                stdout().is_terminal()
            }
        }
    }
}

/// Initialize logger based on log level
pub fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a second initialization in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
