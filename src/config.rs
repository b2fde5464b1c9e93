use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::inventory::{SortDirection, SortField, SortSpec};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub query: QueryConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Number of threads used to size artifacts (0 = auto)
    pub threads: usize,
    /// Maximum scan depth below the root (unset = unlimited)
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Root used when none is given on the command line
    pub last_searched_path: Option<PathBuf>,
    /// Default sort field: name, size
    pub sort_type: SortField,
    /// Default sort direction: asc, desc
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Inventory file (unset = platform cache directory)
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/build-sweeper/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("build-sweeper").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values that would make every scan empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "scanner.max_depth must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Sort used when a query does not specify one.
    pub fn default_sort(&self) -> SortSpec {
        SortSpec::new(self.query.sort_type, self.query.sort_direction)
    }
}
