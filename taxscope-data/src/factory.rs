use std::path::Path;

use taxscope_core::provider::{
    JurisdictionProvider, ProviderError, ProviderFactory, ProviderRegistry, SourceConfig,
    StaticProvider,
};

use crate::builtin::builtin_provider;
use crate::loader::{CatalogError, CatalogLoader};

impl From<CatalogError> for ProviderError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Io { .. } => ProviderError::Io(error.to_string()),
            other => ProviderError::InvalidData(other.to_string()),
        }
    }
}

/// Serves the catalog embedded in the binary. Ignores `location`.
pub struct BuiltinProviderFactory;

impl ProviderFactory for BuiltinProviderFactory {
    fn source_name(&self) -> &'static str {
        "builtin"
    }

    fn create(
        &self,
        _config: &SourceConfig,
    ) -> Result<Box<dyn JurisdictionProvider>, ProviderError> {
        Ok(Box::new(builtin_provider()?))
    }
}

/// Loads a catalog directory; `location` is the directory path.
pub struct CsvProviderFactory;

impl ProviderFactory for CsvProviderFactory {
    fn source_name(&self) -> &'static str {
        "csv"
    }

    fn create(
        &self,
        config: &SourceConfig,
    ) -> Result<Box<dyn JurisdictionProvider>, ProviderError> {
        let dir = config.location.as_deref().ok_or_else(|| {
            ProviderError::Configuration(
                "the csv source requires a location (catalog directory)".to_string(),
            )
        })?;

        let tables = CatalogLoader::load_dir(Path::new(dir))?;
        Ok(Box::new(StaticProvider::new(tables)?))
    }
}

/// A registry with every source this crate knows about.
pub fn default_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(Box::new(BuiltinProviderFactory));
    registry.register(Box::new(CsvProviderFactory));
    registry
}
