use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tax_bracket::{TaxBracket, UpperBound};

/// Largest gap allowed between a bracket's `min` and the previous ceiling.
///
/// Published tables start each bracket one unit (or one cent) above the
/// previous ceiling, e.g. `0 - 11000` followed by `11001 - 44725`.
pub const MAX_BRACKET_GAP: Decimal = Decimal::ONE;

/// Reasons a bracket table is rejected before any calculation runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("bracket table is empty")]
    Empty,

    #[error("bracket {index} starts below zero ({min})")]
    NegativeMinimum { index: usize, min: Decimal },

    #[error("bracket {index} is not in ascending order")]
    NotAscending { index: usize },

    #[error("bracket {index} overlaps the previous bracket")]
    Overlap { index: usize },

    #[error("bracket {index} leaves a gap of {gap} after the previous bracket")]
    Gap { index: usize, gap: Decimal },

    #[error("bracket {index} has an upper bound at or below its minimum")]
    EmptyBracket { index: usize },

    #[error("bracket {index} is unbounded but is not the last bracket")]
    UnboundedBeforeEnd { index: usize },

    #[error("last bracket must be unbounded")]
    MissingUnboundedTop,

    #[error("bracket {index} rate {rate}% is outside 0-100")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("region '{region}' surcharge {rate}% is outside 0-100")]
    SurchargeOutOfRange { region: String, rate: Decimal },
}

/// Display metadata for amounts in a jurisdiction. No conversion is ever
/// performed between currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

/// A sub-jurisdiction (state, province) carrying a flat surcharge on gross
/// income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub surcharge_rate: Decimal,
}

/// Bracket table and regional surcharges for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionTable {
    pub code: String,
    pub name: String,
    pub currency: Currency,
    pub brackets: Vec<TaxBracket>,
    #[serde(default)]
    pub regions: BTreeMap<String, Region>,
}

impl JurisdictionTable {
    /// Looks up a region by code, ignoring case. Unknown codes return `None`.
    pub fn region(
        &self,
        code: &str,
    ) -> Option<&Region> {
        self.regions
            .get(code)
            .or_else(|| self.regions.get(&code.trim().to_ascii_uppercase()))
    }

    /// Checks the bracket and surcharge invariants.
    ///
    /// Brackets must be non-empty, ascending, non-overlapping, separated by
    /// at most [`MAX_BRACKET_GAP`], and end with exactly one unbounded
    /// bracket. Every rate must lie in `[0, 100]`.
    pub fn validate(&self) -> Result<(), TableError> {
        validate_brackets(&self.brackets)?;

        for region in self.regions.values() {
            if !is_percentage(region.surcharge_rate) {
                return Err(TableError::SurchargeOutOfRange {
                    region: region.code.clone(),
                    rate: region.surcharge_rate,
                });
            }
        }

        Ok(())
    }
}

/// Checks the ordering and coverage invariants of a bracket sequence.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), TableError> {
    let last_index = match brackets.len() {
        0 => return Err(TableError::Empty),
        n => n - 1,
    };

    let mut previous: Option<&TaxBracket> = None;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min < Decimal::ZERO {
            return Err(TableError::NegativeMinimum {
                index,
                min: bracket.min,
            });
        }

        if !is_percentage(bracket.rate) {
            return Err(TableError::RateOutOfRange {
                index,
                rate: bracket.rate,
            });
        }

        match bracket.max {
            UpperBound::Bounded(max) if max <= bracket.min => {
                return Err(TableError::EmptyBracket { index });
            }
            UpperBound::Unbounded if index != last_index => {
                return Err(TableError::UnboundedBeforeEnd { index });
            }
            _ => {}
        }

        if let Some(prev) = previous {
            if bracket.min <= prev.min {
                return Err(TableError::NotAscending { index });
            }
            // A bounded predecessor is guaranteed by the check above.
            if let UpperBound::Bounded(ceiling) = prev.max {
                if bracket.min < ceiling {
                    return Err(TableError::Overlap { index });
                }
                let gap = bracket.min - ceiling;
                if gap > MAX_BRACKET_GAP {
                    return Err(TableError::Gap { index, gap });
                }
            }
        }

        previous = Some(bracket);
    }

    if !brackets[last_index].max.is_unbounded() {
        return Err(TableError::MissingUnboundedTop);
    }

    Ok(())
}

fn is_percentage(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE_HUNDRED
}
