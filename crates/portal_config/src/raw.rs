//! The flat key/value mapping the resolver reads from.

use crate::error::{ConfigError, Result};
use crate::keys;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Public runtime configuration as supplied by the hosting environment.
///
/// Values are kept verbatim. Nothing here checks their contents; the resolver
/// decides which keys matter and what an empty value means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    values: BTreeMap<String, String>,
}

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Keep only the recognized source keys from a `(name, value)` iterator.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        vars.into_iter()
            .map(|(k, v)| -> (String, String) { (k.into(), v.into()) })
            .filter(|(k, _)| keys::is_source_key(k))
            .collect()
    }

    /// Read recognized keys from the process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_env() -> Self {
        let raw = Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        );
        debug!(keys = raw.len(), "Loaded public runtime config from environment");
        raw
    }

    /// Parse a flat TOML table of string values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let mut raw = Self::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    raw.insert(key, s);
                }
                other => {
                    return Err(ConfigError::NonStringValue {
                        key,
                        found: other.type_str(),
                    })
                }
            }
        }
        Ok(raw)
    }

    /// Parse a flat JSON object of string values.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let map = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(ConfigError::NotATable(json_type_name(&other))),
        };
        let mut raw = Self::new();
        for (key, value) in map {
            match value {
                serde_json::Value::String(s) => {
                    raw.insert(key, s);
                }
                other => {
                    return Err(ConfigError::NonStringValue {
                        key,
                        found: json_type_name(&other),
                    })
                }
            }
        }
        Ok(raw)
    }

    /// Load a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        let raw = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), keys = raw.len(), "Loaded public runtime config file");
        Ok(raw)
    }

    /// Load a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        let raw = Self::from_json_str(&content)?;
        debug!(path = %path.display(), keys = raw.len(), "Loaded public runtime config file");
        Ok(raw)
    }

    /// Load a file, choosing JSON for a `.json` extension and TOML otherwise.
    pub fn from_file(path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Empty values in `other` are skipped: the resolver treats them as
    /// missing, so they must not hide a value from a lower layer.
    pub fn merge(&mut self, other: RawConfig) {
        for (key, value) in other.values {
            if !value.is_empty() {
                self.values.insert(key, value);
            }
        }
    }

    /// Keys present in the mapping that the resolver ignores.
    pub fn unrecognized_keys(&self) -> Vec<&str> {
        self.keys().filter(|k| !keys::is_source_key(k)).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
