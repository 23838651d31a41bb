use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use taxscope_core::provider::{JurisdictionProvider, ProviderRegistry, SourceConfig};
use taxscope_core::{ProgressiveTaxCalculator, recommend};
use tracing::{debug, info, warn};

use crate::cli::{CalculateArgs, Command, OutputFormat};
use crate::config::Settings;
use crate::report::{self, TaxReport};

/// Builds the registry of known data sources.
pub fn build_registry() -> ProviderRegistry {
    taxscope_data::default_registry()
}

/// Creates the provider selected by `source`.
pub fn open_provider(source: &SourceConfig) -> Result<Box<dyn JurisdictionProvider>> {
    debug!(source = %source.source, location = ?source.location, "opening data source");
    build_registry()
        .create(source)
        .with_context(|| format!("cannot open data source '{}'", source.source))
}

/// A fully resolved calculation request.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub country: String,
    pub income: Decimal,
    pub region: Option<String>,
    pub name: Option<String>,
    pub include_recommendations: bool,
}

impl CalculationRequest {
    /// Fills country, region and name from the config defaults when the
    /// command line leaves them out.
    pub fn from_args(
        args: &CalculateArgs,
        settings: &Settings,
    ) -> Result<Self> {
        let Some(country) = args.country.clone().or_else(|| settings.default_country.clone())
        else {
            bail!("no country given; pass --country or set [defaults] country in the config file");
        };

        Ok(Self {
            country,
            income: args.income,
            region: args.region.clone().or_else(|| settings.default_region.clone()),
            name: args.name.clone().or_else(|| settings.default_name.clone()),
            include_recommendations: !args.no_recommendations,
        })
    }
}

/// Runs a calculation and assembles the report.
pub fn calculate(
    provider: &dyn JurisdictionProvider,
    request: &CalculationRequest,
    generated_on: NaiveDate,
) -> Result<TaxReport> {
    let table = provider
        .jurisdiction(&request.country)
        .with_context(|| format!("cannot load jurisdiction '{}'", request.country))?;

    let region = match request.region.as_deref() {
        Some(code) => {
            let region = table.region(code).cloned();
            if region.is_none() {
                warn!(
                    jurisdiction = %table.code,
                    region = code,
                    "unknown region, no surcharge applied"
                );
            }
            region
        }
        None => None,
    };

    let result = ProgressiveTaxCalculator::new(&table)
        .compute(request.income, request.region.as_deref())
        .with_context(|| format!("cannot compute tax for '{}'", table.code))?;

    info!(
        jurisdiction = %table.code,
        income = %result.gross_income,
        total_tax = %result.total_tax,
        "tax computed"
    );

    let recommendations = if request.include_recommendations {
        recommend(&table.name, region.as_ref().map(|r| r.code.as_str()))
    } else {
        Vec::new()
    };

    Ok(TaxReport {
        name: request.name.clone(),
        generated_on,
        jurisdiction_code: table.code,
        jurisdiction_name: table.name,
        currency: table.currency,
        region,
        result,
        recommendations,
    })
}

fn render<T: serde::Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => report::render_json(value).context("cannot serialize output"),
    }
}

/// Executes one subcommand and returns what should be printed.
pub fn execute(
    command: &Command,
    settings: &Settings,
    provider: &dyn JurisdictionProvider,
) -> Result<String> {
    match command {
        Command::Calculate(args) => {
            let request = CalculationRequest::from_args(args, settings)?;
            let tax_report = calculate(provider, &request, Local::now().date_naive())?;
            render(&tax_report, args.format, report::render_report)
        }
        Command::List { format } => {
            let summaries = provider
                .list_jurisdictions()
                .context("cannot list jurisdictions")?;
            render(&summaries, *format, |s| report::render_jurisdictions(s))
        }
        Command::Brackets { country, format } => {
            let table = provider
                .jurisdiction(country)
                .with_context(|| format!("cannot load jurisdiction '{country}'"))?;
            render(&table, *format, report::render_brackets)
        }
    }
}
