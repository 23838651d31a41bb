use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_bracket::TaxBracket;

/// Where a breakdown entry's tax comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxComponent {
    /// Income falling inside one marginal bracket.
    Marginal,
    /// Flat regional surcharge on the full gross income.
    Surcharge,
}

/// One line of the liability breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    pub bracket: TaxBracket,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub component: TaxComponent,
}

/// Outcome of a progressive tax calculation.
///
/// `breakdown` lists marginal brackets that received income in ascending
/// order, followed by the regional surcharge when one was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
    /// Total tax as a percentage of gross income; zero for zero income.
    pub effective_rate: Decimal,
    pub breakdown: Vec<BracketTax>,
}

impl TaxResult {
    pub fn marginal_entries(&self) -> impl Iterator<Item = &BracketTax> {
        self.breakdown
            .iter()
            .filter(|entry| entry.component == TaxComponent::Marginal)
    }

    pub fn surcharge(&self) -> Option<&BracketTax> {
        self.breakdown
            .iter()
            .find(|entry| entry.component == TaxComponent::Surcharge)
    }
}
