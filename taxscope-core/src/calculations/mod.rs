//! Tax calculation modules.
//!
//! The progressive calculator walks a jurisdiction's marginal brackets and
//! applies any regional surcharge; `common` holds the shared arithmetic.

pub mod common;
pub mod progressive;

pub use progressive::{CalculationError, ProgressiveTaxCalculator, compute, income_from_f64};
