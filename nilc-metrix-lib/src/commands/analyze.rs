use super::Host;
use super::common::GlobalArgs;
use crate::Result;
use crate::analyzer::{Analyzer, analyze_text, word_count};
use crate::metrics::Catalog;
use crate::reports::{generate_compact, generate_console, generate_csv, generate_list};
use crate::results::SourceFilter;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::{Read, Write};

const LOG_TARGET: &str = "   analyze";

/// Output formats for a single analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Metrics grouped by class
    Console,

    /// A compact `{"key":value}` object
    Json,

    /// A JSON array with one record per metric
    List,

    /// CSV rows with one record per metric
    Csv,

    /// The analyzer's output, unprocessed
    Plain,
}

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// File holding the text to analyze (standard input when omitted or `-`)
    #[arg(value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Analyzer profile to run
    #[arg(long, short = 'p', value_name = "PROFILE", default_value = "_all")]
    pub profile: String,

    /// Keep only metrics from these sources, such as `CMP,GTN`
    #[arg(long, value_name = "SOURCES")]
    pub sources: Option<SourceFilter>,

    #[arg(long, short = 'f', value_name = "FORMAT", default_value = "console")]
    pub format: OutputFormat,
}

pub async fn analyze_text_file<H: Host>(host: &mut H, global: &GlobalArgs, args: &AnalyzeArgs) -> Result<()> {
    let config = global.load_config()?;
    let text = read_input(host, args.input.as_deref())?;
    let text = text.trim_end();

    let words = word_count(text);
    if words > config.max_words {
        bail!("the text has {words} words, more than the limit of {}", config.max_words);
    }

    let analyzer = config.analyzer();
    if !analyzer.supports(&args.profile) {
        bail!("unknown analyzer profile '{}'", args.profile);
    }

    log::info!(target: LOG_TARGET, "Analyzing {words} words with profile '{}'", args.profile);

    let catalog = Catalog::new(config.catalog_version);
    let analysis = analyze_text(&analyzer, &catalog, &args.profile, text, args.sources.as_ref())
        .await
        .into_app_err("analyzing the text")?;

    let mut out = String::new();
    match args.format {
        OutputFormat::Console => generate_console(&analysis.results, global.use_colors(), &mut out)?,
        OutputFormat::Json => {
            generate_compact(analysis.results.items(), &mut out)?;
            out.push('\n');
        }
        OutputFormat::List => {
            generate_list(&analysis.results, &mut out)?;
            out.push('\n');
        }
        OutputFormat::Csv => generate_csv(&analysis.results, &mut out)?,
        OutputFormat::Plain => out.push_str(&analysis.raw),
    }

    let _ = write!(host.output(), "{out}");
    Ok(())
}

fn read_input<H: Host>(host: &mut H, path: Option<&Utf8Path>) -> Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => fs::read_to_string(path).into_app_err_with(|| format!("reading '{path}'")),
        _ => {
            let mut text = String::new();
            let _ = host.input().read_to_string(&mut text).into_app_err("reading standard input")?;
            Ok(text)
        }
    }
}
