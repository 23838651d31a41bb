use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::config::Overrides;
use crate::utils::{parse_amount, parse_code};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive income tax calculator for 26 jurisdictions.
///
/// Loads bracket tables from the built-in catalog or a CSV catalog
/// directory, computes the liability bracket by bracket, and prints a
/// report with tax-saving recommendations.
#[derive(Debug, Parser)]
#[command(name = "taxscope", version, about)]
pub struct Cli {
    /// TOML config file (defaults to ./taxscope.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Jurisdiction data source (`builtin` or `csv`).
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Catalog directory for the `csv` source; implies `--source csv`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level or EnvFilter directive; overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the tax on an annual income and print a report.
    Calculate(CalculateArgs),

    /// List the available jurisdictions.
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the bracket table and regional surcharges of a jurisdiction.
    Brackets {
        /// Jurisdiction code, e.g. `US`.
        #[arg(long, value_parser = parse_code)]
        country: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// Jurisdiction code; falls back to `[defaults] country`.
    #[arg(long, value_parser = parse_code)]
    pub country: Option<String>,

    /// Annual gross income; thousands separators are accepted (`50,000`).
    #[arg(long, value_parser = parse_amount)]
    pub income: Decimal,

    /// Region code for a surcharge; falls back to `[defaults] region`.
    #[arg(long, value_parser = parse_code)]
    pub region: Option<String>,

    /// Name printed on the report; falls back to `[defaults] name`.
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave recommendations out of the report.
    #[arg(long)]
    pub no_recommendations: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            source: self.source.clone(),
            data_dir: self.data_dir.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}
