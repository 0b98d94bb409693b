//! Command dispatch logic for nilc-metrix

use super::common::{GlobalArgs, LogLevel, init_logging};
use super::{AnalyzeArgs, CatalogArgs, InitArgs, ServeArgs, analyze_text_file, init_config, print_catalog, serve, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "nilc-metrix", version, author, long_about = None)]
#[command(about = "Textual complexity metrics for Portuguese")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web pages and the HTTP API
    Serve(ServeArgs),
    /// Compute the metrics of one text
    Analyze(AnalyzeArgs),
    /// Print the metric catalog
    Catalog(CatalogArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate,
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);

    let default_level = if matches!(cli.command, Command::Serve(_)) {
        LogLevel::Info
    } else {
        LogLevel::None
    };
    init_logging(cli.global.log_level.unwrap_or(default_level));

    match &cli.command {
        Command::Serve(args) => serve(host, &cli.global, args).await,
        Command::Analyze(args) => analyze_text_file(host, &cli.global, args).await,
        Command::Catalog(args) => print_catalog(host, &cli.global, args),
        Command::Init(args) => init_config(host, args),
        Command::Validate => validate_config(host, cli.global.config.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["nilc-metrix", "catalog", "--log-level", "debug", "--color", "never"]);
        assert_eq!(cli.global.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Command::Catalog(_)));
    }

    #[tokio::test]
    async fn test_run_catalog() {
        let mut host = TestHost::new();
        run(&mut host, ["nilc-metrix", "catalog", "--source", "LIW", "--color", "never"]).await.unwrap();
        assert!(host.output_text().contains("Sentimento"));
    }
}
