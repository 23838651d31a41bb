use std::path::{Path, PathBuf};

use serde::Deserialize;
use taxscope_core::provider::SourceConfig;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "taxscope.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a `taxscope.toml` file. Every key is optional.
///
/// ```toml
/// [data]
/// source = "csv"
/// location = "./catalog"
///
/// [defaults]
/// country = "US"
/// region = "CA"
/// name = "Jane Doe"
///
/// [logging]
/// level = "debug"
/// file = "taxscope.log"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data: Option<DataConfig>,
    pub defaults: Option<DefaultsConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub source: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub country: Option<String>,
    pub region: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(
        content: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Loads `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] if present, otherwise an empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub source: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Effective settings after merging command line, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: SourceConfig,
    pub default_country: Option<String>,
    pub default_region: Option<String>,
    pub default_name: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Merges `overrides` over `file`.
    ///
    /// A `--data-dir` without `--source` selects the `csv` source.
    pub fn resolve(
        file: FileConfig,
        overrides: Overrides,
    ) -> Self {
        let data = file.data.unwrap_or_default();
        let defaults = file.defaults.unwrap_or_default();
        let logging = file.logging.unwrap_or_default();

        let location = overrides
            .data_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .or(data.location);

        let source = match (overrides.source, &overrides.data_dir) {
            (Some(source), _) => source,
            (None, Some(_)) => "csv".to_string(),
            (None, None) => data
                .source
                .unwrap_or_else(|| SourceConfig::default().source),
        };

        Self {
            source: SourceConfig {
                source: source.trim().to_ascii_lowercase(),
                location,
            },
            default_country: defaults.country,
            default_region: defaults.region,
            default_name: defaults.name,
            log_level: overrides.log_level.or(logging.level),
            log_file: overrides.log_file.or(logging.file),
        }
    }
}
