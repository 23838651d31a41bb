pub mod calculations;
pub mod models;
pub mod provider;
pub mod recommendations;

pub use calculations::{CalculationError, ProgressiveTaxCalculator, compute};
pub use models::*;
pub use provider::{JurisdictionProvider, ProviderError};
pub use recommendations::recommend;
