use anyhow::Context;
use clap::Parser;
use tracing::debug;

use taxscope_cli::app;
use taxscope_cli::cli::Cli;
use taxscope_cli::config::{FileConfig, Settings};
use taxscope_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = FileConfig::discover(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config, cli.overrides());

    logging::init_logging(settings.log_level.as_deref(), settings.log_file.as_deref())
        .context("cannot initialize logging")?;
    debug!(?settings, "settings resolved");

    let provider = app::open_provider(&settings.source)?;
    let output = app::execute(&cli.command, &settings, provider.as_ref())?;
    print!("{output}");

    Ok(())
}
