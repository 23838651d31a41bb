use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Upper edge of a tax bracket.
///
/// Serialized as an optional number: `null` (or an empty CSV cell) is the
/// open-ended top bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Decimal>", into = "Option<Decimal>")]
pub enum UpperBound {
    Bounded(Decimal),
    Unbounded,
}

impl UpperBound {
    pub fn as_option(&self) -> Option<Decimal> {
        match self {
            Self::Bounded(max) => Some(*max),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl From<Option<Decimal>> for UpperBound {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl From<UpperBound> for Option<Decimal> {
    fn from(value: UpperBound) -> Self {
        value.as_option()
    }
}

/// A contiguous income range taxed at a single marginal rate.
///
/// `rate` is a percentage (`22` means 22%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: UpperBound,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn bounded(
        min: Decimal,
        max: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            min,
            max: UpperBound::Bounded(max),
            rate,
        }
    }

    pub fn unbounded(
        min: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            min,
            max: UpperBound::Unbounded,
            rate,
        }
    }
}

impl fmt::Display for TaxBracket {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.max {
            UpperBound::Bounded(max) => write!(f, "{} - {} @ {}%", self.min, max, self.rate),
            UpperBound::Unbounded => write!(f, "above {} @ {}%", self.min, self.rate),
        }
    }
}
