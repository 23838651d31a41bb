//! Progressive (marginal-bracket) income tax.
//!
//! Income is allocated to brackets from the lowest upward. Each bracket
//! taxes only the slice of income that falls inside it, so crossing a
//! boundary never re-taxes income already allocated to lower brackets.
//! An optional regional surcharge is then applied to the full gross income.
//!
//! # Bracket sizes
//!
//! The size of a bounded bracket is measured from the previous bracket's
//! ceiling (the first bracket from its own `min`). Tables written in the
//! whole-unit style (`0 - 11000`, `11001 - 44725`) therefore cover every
//! unit of income exactly once, the same as strictly contiguous tables.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use rust_decimal_macros::dec;
//! use taxscope_core::calculations::ProgressiveTaxCalculator;
//! use taxscope_core::{Currency, JurisdictionTable, TaxBracket};
//!
//! let table = JurisdictionTable {
//!     code: "US".to_string(),
//!     name: "United States".to_string(),
//!     currency: Currency { code: "USD".to_string(), symbol: "$".to_string() },
//!     brackets: vec![
//!         TaxBracket::bounded(dec!(0), dec!(11000), dec!(10)),
//!         TaxBracket::bounded(dec!(11001), dec!(44725), dec!(12)),
//!         TaxBracket::unbounded(dec!(44726), dec!(22)),
//!     ],
//!     regions: BTreeMap::new(),
//! };
//!
//! let result = ProgressiveTaxCalculator::new(&table)
//!     .compute(dec!(50000), None)
//!     .unwrap();
//!
//! assert_eq!(result.total_tax, dec!(6307.5));
//! assert_eq!(result.breakdown.len(), 3);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;
use tracing::{debug, trace};

use crate::calculations::common::{percent_of, percentage};
use crate::models::{
    BracketTax, JurisdictionTable, Region, TableError, TaxBracket, TaxComponent, TaxResult,
    UpperBound,
};

/// Errors raised by a calculation. Input and table problems are caught
/// before any bracket is walked; `Overflow` only occurs for incomes close
/// to the limit of [`Decimal`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("invalid bracket table: {0}")]
    InvalidTable(#[from] TableError),

    #[error("invalid income '{0}': income must be a finite, non-negative amount")]
    InvalidIncome(String),

    #[error("tax on income '{0}' exceeds the representable range")]
    Overflow(Decimal),
}

/// Converts a floating-point income into a [`Decimal`], rejecting NaN,
/// infinities and negative values.
pub fn income_from_f64(value: f64) -> Result<Decimal, CalculationError> {
    if !value.is_finite() {
        return Err(CalculationError::InvalidIncome(value.to_string()));
    }

    let income =
        Decimal::from_f64(value).ok_or_else(|| CalculationError::InvalidIncome(value.to_string()))?;
    check_income(income)?;

    Ok(income)
}

fn check_income(income: Decimal) -> Result<(), CalculationError> {
    if income.is_sign_negative() && !income.is_zero() {
        return Err(CalculationError::InvalidIncome(income.to_string()));
    }
    Ok(())
}

/// Calculator bound to one jurisdiction's bracket table.
#[derive(Debug, Clone, Copy)]
pub struct ProgressiveTaxCalculator<'a> {
    table: &'a JurisdictionTable,
}

impl<'a> ProgressiveTaxCalculator<'a> {
    pub fn new(table: &'a JurisdictionTable) -> Self {
        Self { table }
    }

    /// Computes the tax owed on `income`, adding the surcharge of `region`
    /// when the table defines one.
    ///
    /// A region the table does not know is not an error: no surcharge is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if:
    /// - `income` is negative
    /// - the bracket table violates its ordering or coverage invariants
    pub fn compute(
        &self,
        income: Decimal,
        region: Option<&str>,
    ) -> Result<TaxResult, CalculationError> {
        check_income(income)?;
        self.table.validate()?;

        let mut breakdown = Vec::with_capacity(self.table.brackets.len() + 1);
        let mut total_tax = self.allocate_brackets(income, &mut breakdown)?;

        if let Some(code) = region {
            match self.table.region(code) {
                Some(region) => {
                    let entry = self.surcharge(income, region)?;
                    total_tax = total_tax
                        .checked_add(entry.tax_amount)
                        .ok_or(CalculationError::Overflow(income))?;
                    breakdown.push(entry);
                }
                None => debug!(
                    jurisdiction = %self.table.code,
                    region = code,
                    "unknown region, no surcharge applied"
                ),
            }
        }

        let result = TaxResult {
            gross_income: income,
            total_tax,
            net_income: income - total_tax,
            effective_rate: percentage(total_tax, income),
            breakdown,
        };

        debug!(
            jurisdiction = %self.table.code,
            income = %result.gross_income,
            total_tax = %result.total_tax,
            effective_rate = %result.effective_rate,
            "computed progressive tax"
        );

        Ok(result)
    }

    /// Walks the brackets in ascending order, appending an entry for every
    /// bracket that receives income. Returns the marginal tax total.
    fn allocate_brackets(
        &self,
        income: Decimal,
        breakdown: &mut Vec<BracketTax>,
    ) -> Result<Decimal, CalculationError> {
        let brackets = &self.table.brackets;
        let mut remaining = income;
        let mut total_tax = Decimal::ZERO;
        let mut floor = brackets.first().map_or(Decimal::ZERO, |b| b.min);

        for bracket in brackets {
            let taxable = match bracket.max {
                UpperBound::Bounded(ceiling) => {
                    let size = ceiling - floor;
                    floor = ceiling;
                    let taxable = remaining.max(Decimal::ZERO).min(size);
                    remaining -= size;
                    taxable
                }
                UpperBound::Unbounded => {
                    let taxable = remaining.max(Decimal::ZERO);
                    remaining = Decimal::ZERO;
                    taxable
                }
            };

            let tax =
                percent_of(taxable, bracket.rate).ok_or(CalculationError::Overflow(income))?;

            if taxable > Decimal::ZERO {
                trace!(bracket = %bracket, %taxable, %tax, "bracket allocated");
                breakdown.push(BracketTax {
                    bracket: *bracket,
                    taxable_amount: taxable,
                    tax_amount: tax,
                    component: TaxComponent::Marginal,
                });
            }

            total_tax = total_tax
                .checked_add(tax)
                .ok_or(CalculationError::Overflow(income))?;

            if remaining <= Decimal::ZERO {
                break;
            }
        }

        Ok(total_tax)
    }

    /// Flat surcharge on the full gross income, shaped as a synthetic
    /// bracket covering all income.
    fn surcharge(
        &self,
        income: Decimal,
        region: &Region,
    ) -> Result<BracketTax, CalculationError> {
        let tax_amount = percent_of(income, region.surcharge_rate)
            .ok_or(CalculationError::Overflow(income))?;

        Ok(BracketTax {
            bracket: TaxBracket::unbounded(Decimal::ZERO, region.surcharge_rate),
            taxable_amount: income,
            tax_amount,
            component: TaxComponent::Surcharge,
        })
    }
}

/// Computes the tax owed on `income` under `table`.
///
/// Shorthand for [`ProgressiveTaxCalculator::compute`].
pub fn compute(
    income: Decimal,
    table: &JurisdictionTable,
    region: Option<&str>,
) -> Result<TaxResult, CalculationError> {
    ProgressiveTaxCalculator::new(table).compute(income, region)
}
