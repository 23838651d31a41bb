use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use taxscope_data::{CatalogLoader, builtin_catalog};

/// Validate or export jurisdiction catalogs.
///
/// A catalog directory holds three CSV files:
/// - jurisdictions.csv: code,name,currency,symbol
/// - brackets.csv: jurisdiction,min,max,rate (empty max for the top bracket)
/// - regions.csv: jurisdiction,code,name,surcharge_rate (optional)
#[derive(Parser, Debug)]
#[command(name = "taxscope-catalog")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a catalog directory loads and every table is valid
    Validate {
        /// Directory containing the catalog CSV files
        #[arg(short, long)]
        dir: PathBuf,
    },
    /// Write the built-in catalog to a directory as CSV files
    Export {
        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Validate { dir } => {
            println!("Validating catalog in: {}", dir.display());

            let tables = CatalogLoader::load_dir(&dir)
                .with_context(|| format!("Failed to load catalog: {}", dir.display()))?;

            for table in &tables {
                println!(
                    "  {:<4}{:<24}{} brackets, {} regions",
                    table.code,
                    table.name,
                    table.brackets.len(),
                    table.regions.len()
                );
            }
            println!("Catalog is valid: {} jurisdictions.", tables.len());
        }
        Command::Export { out } => {
            let tables = builtin_catalog().context("Built-in catalog is invalid")?;

            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create: {}", out.display()))?;
            CatalogLoader::write_dir(&tables, &out)
                .with_context(|| format!("Failed to write catalog: {}", out.display()))?;

            println!(
                "Exported {} jurisdictions to: {}",
                tables.len(),
                out.display()
            );
        }
    }

    Ok(())
}
