//! The jurisdiction catalog compiled into the binary.

use taxscope_core::JurisdictionTable;
use taxscope_core::provider::{ProviderError, StaticProvider};

use crate::loader::{CatalogError, CatalogLoader};

const JURISDICTIONS_CSV: &str = include_str!("../data/jurisdictions.csv");
const BRACKETS_CSV: &str = include_str!("../data/brackets.csv");
const REGIONS_CSV: &str = include_str!("../data/regions.csv");

/// Parse the embedded catalog.
pub fn builtin_catalog() -> Result<Vec<JurisdictionTable>, CatalogError> {
    CatalogLoader::parse(
        JURISDICTIONS_CSV.as_bytes(),
        BRACKETS_CSV.as_bytes(),
        REGIONS_CSV.as_bytes(),
    )
}

/// A provider serving the embedded catalog.
pub fn builtin_provider() -> Result<StaticProvider, ProviderError> {
    StaticProvider::new(builtin_catalog()?)
}
