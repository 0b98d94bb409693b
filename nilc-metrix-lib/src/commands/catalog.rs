use super::Host;
use super::common::GlobalArgs;
use crate::Result;
use crate::metrics::{Catalog, CatalogVersion, MetricDefinition, MetricSource};
use clap::{Parser, ValueEnum};
use core::fmt::Write as _;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

/// Output formats for the catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    /// Metrics grouped by class
    Console,

    /// A JSON array with one object per metric
    Json,
}

#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Catalog version to list (default comes from the configuration)
    #[arg(long, value_name = "VERSION")]
    pub catalog_version: Option<CatalogVersion>,

    /// Only list metrics from this source
    #[arg(long, value_name = "SOURCE", ignore_case = true)]
    pub source: Option<MetricSource>,

    #[arg(long, short = 'f', value_name = "FORMAT", default_value = "console")]
    pub format: CatalogFormat,
}

#[derive(Debug, Serialize)]
struct CatalogRecord<'a> {
    key: &'a str,
    class: &'a str,
    source: MetricSource,
    level: &'a str,
    description: &'a str,
}

pub fn print_catalog<H: Host>(host: &mut H, global: &GlobalArgs, args: &CatalogArgs) -> Result<()> {
    let version = match args.catalog_version {
        Some(version) => version,
        None => global.load_config()?.catalog_version,
    };

    let catalog = Catalog::new(version);
    let keep = |def: &MetricDefinition| args.source.is_none_or(|source| def.source == source);

    let mut out = String::new();
    match args.format {
        CatalogFormat::Console => write_console(&catalog, keep, global.use_colors(), &mut out)?,
        CatalogFormat::Json => {
            let records: Vec<_> = catalog
                .group_by_class()
                .into_iter()
                .flat_map(|(_, defs)| defs)
                .filter(keep)
                .map(|def| CatalogRecord {
                    key: def.key,
                    class: def.class,
                    source: def.source,
                    level: def.level.map_or("", <&'static str>::from),
                    description: def.description,
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        }
    }

    let _ = write!(host.output(), "{out}");
    Ok(())
}

fn write_console(catalog: &Catalog, keep: impl Fn(&MetricDefinition) -> bool, use_colors: bool, out: &mut String) -> Result<()> {
    let groups: Vec<_> = catalog
        .group_by_class()
        .into_iter()
        .map(|(class, defs)| (class, defs.into_iter().filter(|d| keep(d)).collect::<Vec<_>>()))
        .filter(|(_, defs)| !defs.is_empty())
        .collect();

    let key_width = groups
        .iter()
        .flat_map(|(_, defs)| defs.iter().map(|d| d.key.chars().count()))
        .max()
        .unwrap_or(0);

    for (i, (class, defs)) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        if use_colors {
            writeln!(out, "{}", class.bold())?;
        } else {
            writeln!(out, "{class}")?;
        }

        for def in defs {
            let level = def.level.map_or("", <&'static str>::from);
            writeln!(out, "  {:<key_width$}  {:<3}  {level:<9}  {}", def.key, def.source, def.description)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::common::ColorMode;
    use crate::commands::host::TestHost;

    fn global() -> GlobalArgs {
        GlobalArgs {
            config: None,
            color: ColorMode::Never,
            log_level: None,
        }
    }

    #[test]
    fn test_console_single_source() {
        let mut host = TestHost::new();
        let args = CatalogArgs {
            catalog_version: Some(CatalogVersion::Current),
            source: Some(MetricSource::Liw),
            format: CatalogFormat::Console,
        };
        print_catalog(&mut host, &global(), &args).unwrap();

        let output = host.output_text();
        assert!(output.starts_with("Sentimento\n"));
        assert!(output.contains("  negative_words  LIW  text       Proporção de palavras de polaridade negativa"));
        assert!(!output.contains("flesch"));
    }

    #[test]
    fn test_json_legacy() {
        let mut host = TestHost::new();
        let args = CatalogArgs {
            catalog_version: Some(CatalogVersion::Legacy),
            source: None,
            format: CatalogFormat::Json,
        };
        print_catalog(&mut host, &global(), &args).unwrap();

        let records: serde_json::Value = serde_json::from_str(&host.output_text()).unwrap();
        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 200);

        let flesch = records.iter().find(|r| r["key"] == "flesch").unwrap();
        assert_eq!(flesch["class"], "Classic Formulas");
        assert_eq!(flesch["source"], "CMP");
        assert_eq!(flesch["level"], "");
    }
}
