pub mod factory;
pub mod repository;

pub use factory::{ProviderFactory, ProviderRegistry, SourceConfig};
pub use repository::{
    JurisdictionProvider, JurisdictionSummary, ProviderError, StaticProvider, normalize_code,
};
