mod jurisdiction;
mod recommendation;
mod tax_bracket;
mod tax_result;

pub use jurisdiction::{
    Currency, JurisdictionTable, MAX_BRACKET_GAP, Region, TableError, validate_brackets,
};
pub use recommendation::{Difficulty, Impact, Recommendation, RecommendationCategory, Timeframe};
pub use tax_bracket::{TaxBracket, UpperBound};
pub use tax_result::{BracketTax, TaxComponent, TaxResult};
