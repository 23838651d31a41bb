use std::collections::HashMap;

use super::repository::{JurisdictionProvider, ProviderError};

/// Source-agnostic data configuration.
///
/// `source` must match the [`ProviderFactory::source_name`] of a registered
/// factory. `location` is passed through to that factory unchanged; its
/// meaning is entirely source-specific.
///
/// | source    | location examples          |
/// |-----------|----------------------------|
/// | `builtin` | ignored                    |
/// | `csv`     | `./data`, `/etc/taxscope`  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"csv"`).
    pub source: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub location: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source: "builtin".to_string(),
            location: None,
        }
    }
}

/// One implementation per data source. Each source exports a unit struct
/// implementing this trait, registered with a [`ProviderRegistry`] at
/// startup.
pub trait ProviderFactory: Send + Sync {
    /// Unique, lowercase identifier for this source.
    fn source_name(&self) -> &'static str;

    /// Load the source and return a ready-to-use provider.
    fn create(
        &self,
        config: &SourceConfig,
    ) -> Result<Box<dyn JurisdictionProvider>, ProviderError>;
}

/// Registry of [`ProviderFactory`] instances, keyed by source name.
pub struct ProviderRegistry {
    factories: HashMap<&'static str, Box<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a source factory, replacing any factory with the same
    /// [`ProviderFactory::source_name`].
    pub fn register(
        &mut self,
        factory: Box<dyn ProviderFactory>,
    ) {
        self.factories.insert(factory.source_name(), factory);
    }

    /// Names of every registered source, sorted alphabetically.
    pub fn available_sources(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory matching `config.source`.
    ///
    /// # Errors
    /// * [`ProviderError::Configuration`] if no factory is registered for
    ///   the requested source.
    /// * Any error the chosen factory itself returns.
    pub fn create(
        &self,
        config: &SourceConfig,
    ) -> Result<Box<dyn JurisdictionProvider>, ProviderError> {
        let factory = self
            .factories
            .get(config.source.as_str())
            .ok_or_else(|| {
                ProviderError::Configuration(format!(
                    "unknown data source '{}'; available: {:?}",
                    config.source,
                    self.available_sources()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
