use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a public runtime configuration source.
///
/// Resolving a [`crate::PortalConfig`] never fails; only reading a source can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config key '{key}' must be a string, found {found}")]
    NonStringValue { key: String, found: &'static str },

    #[error("config source must be a flat table of strings, found {0}")]
    NotATable(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
