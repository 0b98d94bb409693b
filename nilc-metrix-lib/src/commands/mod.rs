//! Command-line interface for nilc-metrix
//!
//! The `run` function parses command-line arguments using clap and routes to the
//! appropriate command handler. All commands share the global `--config`, `--color`,
//! and `--log-level` options.
//!
//! ## Commands
//!
//! - **serve**: Start the HTTP server with the tool pages and the metrics API
//! - **analyze**: Run the analyzer once over a file or standard input and print the results
//! - **catalog**: List the metric catalog, optionally restricted to one source
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and values
//!
//! Configuration is a TOML file (`nilc-metrix.toml` by default) holding the listen
//! address, word ceilings, API keys, and the settings of the external services.

mod analyze;
mod catalog;
mod common;
mod config;
mod host;
mod init;
mod run;
mod serve;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use analyze::{AnalyzeArgs, OutputFormat, analyze_text_file};
pub use catalog::{CatalogArgs, CatalogFormat, print_catalog};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use serve::{ServeArgs, build_state, serve};
pub use validate::validate_config;
