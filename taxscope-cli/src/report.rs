//! Text and JSON rendering of calculation results and catalog listings.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use taxscope_core::calculations::common::round_half_up;
use taxscope_core::provider::JurisdictionSummary;
use taxscope_core::{
    Currency, JurisdictionTable, RecommendationCategory, Region, TaxBracket, TaxComponent,
    TaxResult, UpperBound,
};

/// Currencies rendered as `CODE amount` instead of `symbol amount`.
const CODE_PREFIXED: [&str; 2] = ["INR", "KRW"];

/// Everything the presentation layer needs for one calculation.
#[derive(Debug, Clone, Serialize)]
pub struct TaxReport {
    pub name: Option<String>,
    pub generated_on: NaiveDate,
    pub jurisdiction_code: String,
    pub jurisdiction_name: String,
    pub currency: Currency,
    pub region: Option<Region>,
    pub result: TaxResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<RecommendationCategory>,
}

/// Formats a money amount for `currency`, rounded half-up to cents.
///
/// ```
/// # use rust_decimal_macros::dec;
/// # use taxscope_core::Currency;
/// # use taxscope_cli::report::format_amount;
/// let usd = Currency { code: "USD".into(), symbol: "$".into() };
/// assert_eq!(format_amount(dec!(6307.5), &usd), "$6,307.50");
/// ```
pub fn format_amount(
    amount: Decimal,
    currency: &Currency,
) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = if currency.code == "INR" {
        group_indian(whole)
    } else {
        group_thousands(whole)
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if CODE_PREFIXED.contains(&currency.code.as_str()) {
        format!("{sign}{} {grouped}.{cents}", currency.code)
    } else {
        format!("{sign}{}{grouped}.{cents}", currency.symbol)
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `12345678` -> `1,23,45,678` (lakh and crore grouping)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Percentage with exactly two decimals, e.g. `12.61%`.
pub fn format_percent(rate: Decimal) -> String {
    let mut rounded = round_half_up(rate);
    rounded.rescale(2);
    format!("{rounded}%")
}

/// Bracket rate as written in the table, e.g. `22%` or `13.3%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// `min - max` for bounded brackets, `Above min` for the top one.
pub fn format_range(
    bracket: &TaxBracket,
    currency: &Currency,
) -> String {
    match bracket.max {
        UpperBound::Bounded(max) => format!(
            "{} - {}",
            format_amount(bracket.min, currency),
            format_amount(max, currency)
        ),
        UpperBound::Unbounded => format!("Above {}", format_amount(bracket.min, currency)),
    }
}

pub fn render_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

pub fn render_report(report: &TaxReport) -> String {
    report.to_string()
}

pub fn render_jurisdictions(summaries: &[JurisdictionSummary]) -> String {
    JurisdictionListing(summaries).to_string()
}

pub fn render_brackets(table: &JurisdictionTable) -> String {
    BracketTable(table).to_string()
}

impl fmt::Display for TaxReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let currency = &self.currency;
        let result = &self.result;

        writeln!(f, "Tax Calculation Report")?;
        if let Some(name) = &self.name {
            writeln!(f, "Generated for: {name}")?;
        }
        writeln!(f, "Date: {}", self.generated_on.format("%Y-%m-%d"))?;

        writeln!(f, "\nLocation Details")?;
        writeln!(
            f,
            "  Country: {} ({})",
            self.jurisdiction_name, self.jurisdiction_code
        )?;
        if let Some(region) = &self.region {
            writeln!(f, "  Region: {} ({})", region.name, region.code)?;
        }

        writeln!(f, "\nIncome Summary")?;
        let summary = [
            ("Gross Income", format_amount(result.gross_income, currency)),
            ("Total Tax", format_amount(result.total_tax, currency)),
            ("Net Income", format_amount(result.net_income, currency)),
            ("Effective Tax Rate", format_percent(result.effective_rate)),
        ];
        for (label, value) in summary {
            writeln!(f, "  {:<20}{:>24}", format!("{label}:"), value)?;
        }

        writeln!(f, "\nTax Bracket Breakdown")?;
        if result.breakdown.is_empty() {
            writeln!(f, "  No taxable income.")?;
        } else {
            writeln!(
                f,
                "  {:<40}{:>8}{:>22}{:>20}",
                "Income Range", "Rate", "Taxable Amount", "Tax"
            )?;
            for entry in &result.breakdown {
                let range = match entry.component {
                    TaxComponent::Marginal => format_range(&entry.bracket, currency),
                    TaxComponent::Surcharge => "Regional surcharge".to_string(),
                };
                writeln!(
                    f,
                    "  {:<40}{:>8}{:>22}{:>20}",
                    range,
                    format_rate(entry.bracket.rate),
                    format_amount(entry.taxable_amount, currency),
                    format_amount(entry.tax_amount, currency)
                )?;
            }
        }

        if self.recommendations.iter().any(|c| !c.recommendations.is_empty()) {
            writeln!(f, "\nRecommendations")?;
            for category in &self.recommendations {
                if category.recommendations.is_empty() {
                    continue;
                }
                writeln!(f, "  {}", category.title)?;
                for rec in &category.recommendations {
                    writeln!(
                        f,
                        "    - {} [impact: {:?}, difficulty: {:?}]",
                        rec.title, rec.impact, rec.difficulty
                    )?;
                    writeln!(f, "      {}", rec.description)?;
                }
            }
        }

        Ok(())
    }
}

/// Text listing of available jurisdictions.
pub struct JurisdictionListing<'a>(pub &'a [JurisdictionSummary]);

impl fmt::Display for JurisdictionListing<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<6}{:<24}{:<10}Regions", "Code", "Name", "Currency")?;
        for summary in self.0 {
            writeln!(
                f,
                "{:<6}{:<24}{:<10}{}",
                summary.code,
                summary.name,
                summary.currency,
                summary.regions.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Text rendering of one jurisdiction's brackets and regional surcharges.
pub struct BracketTable<'a>(pub &'a JurisdictionTable);

impl fmt::Display for BracketTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let table = self.0;
        let currency = &table.currency;

        writeln!(
            f,
            "{} ({}), amounts in {}",
            table.name, table.code, currency.code
        )?;
        writeln!(f, "\n  {:<40}{:>8}", "Income Range", "Rate")?;
        for bracket in &table.brackets {
            writeln!(
                f,
                "  {:<40}{:>8}",
                format_range(bracket, currency),
                format_rate(bracket.rate)
            )?;
        }

        if !table.regions.is_empty() {
            writeln!(f, "\n  {:<6}{:<20}{:>10}", "Region", "Name", "Surcharge")?;
            for region in table.regions.values() {
                writeln!(
                    f,
                    "  {:<6}{:<20}{:>10}",
                    region.code,
                    region.name,
                    format_rate(region.surcharge_rate)
                )?;
            }
        }

        Ok(())
    }
}
