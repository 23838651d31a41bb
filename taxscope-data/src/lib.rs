pub mod builtin;
pub mod factory;
pub mod loader;

pub use builtin::{builtin_catalog, builtin_provider};
pub use factory::{BuiltinProviderFactory, CsvProviderFactory, default_registry};
pub use loader::{BracketRecord, CatalogError, CatalogLoader, JurisdictionRecord, RegionRecord};
