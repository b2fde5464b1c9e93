use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root does not exist or is not a directory.
    #[error("Invalid scan root: {0}")]
    InvalidRoot(PathBuf),

    /// The persisted inventory could not be read or parsed.
    #[error("Cache unreadable at '{path}': {source}")]
    CacheUnreadable {
        path: PathBuf,
        #[source]
        source: CacheError,
    },

    #[error("Malformed inventory document: {0}")]
    CacheFormat(#[source] serde_json::Error),

    #[error("Failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The scan was abandoned before it finished.
    #[error("Scan cancelled")]
    Cancelled,
}

/// Why a persisted inventory could not be loaded
#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweeperError>;
