//! Overlay of public runtime configuration on fixed defaults.

use crate::defaults::*;
use crate::keys;
use crate::raw::RawConfig;
use serde::{Deserialize, Serialize};

/// Fully populated portal configuration.
///
/// Every attribute always holds a value. Serialized names match the keys the
/// UI layer and API clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Ego (auth service) API root URL
    #[serde(rename = "NEXT_PUBLIC_EGO_API_ROOT")]
    pub ego_api_root: String,
    /// Ego client identifier
    #[serde(rename = "NEXT_PUBLIC_EGO_CLIENT_ID")]
    pub ego_client_id: String,
    /// PEM-encoded Ego public key, not validated
    #[serde(rename = "NEXT_PUBLIC_EGO_PUBLIC_KEY")]
    pub ego_public_key: String,
    /// Arranger project identifier
    #[serde(rename = "NEXT_PUBLIC_ARRANGER_PROJECT_ID")]
    pub arranger_project_id: String,
    /// GraphQL field Arranger exposes the index under
    #[serde(rename = "NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD")]
    pub arranger_graphql_field: String,
    /// Arranger index name
    #[serde(rename = "NEXT_PUBLIC_ARRANGER_INDEX")]
    pub arranger_index: String,
    /// Arranger API base URL
    #[serde(rename = "NEXT_PUBLIC_ARRANGER_API")]
    pub arranger_api: String,
    /// Base path the portal is served under
    #[serde(rename = "NEXT_PUBLIC_BASE_PATH")]
    pub base_path: String,
}

impl PortalConfig {
    /// Resolve against `raw`, falling back to defaults for missing or empty keys.
    pub fn resolve(raw: Option<&RawConfig>) -> Self {
        let pick = |key: &str, default: &str| -> String {
            raw.and_then(|r| r.get(key))
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            ego_api_root: pick(keys::NEXT_PUBLIC_EGO_API_ROOT, DEFAULT_EGO_API_ROOT),
            ego_client_id: pick(keys::NEXT_PUBLIC_EGO_CLIENT_ID, DEFAULT_EGO_CLIENT_ID),
            // Read from EGO_PUBLIC_KEY, not NEXT_PUBLIC_EGO_PUBLIC_KEY. Deployments
            // set the unprefixed name; keep it.
            ego_public_key: pick(keys::EGO_PUBLIC_KEY, DEFAULT_EGO_PUBLIC_KEY),
            arranger_project_id: pick(
                keys::NEXT_PUBLIC_ARRANGER_PROJECT_ID,
                DEFAULT_ARRANGER_PROJECT_ID,
            ),
            arranger_graphql_field: pick(
                keys::NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD,
                DEFAULT_ARRANGER_GRAPHQL_FIELD,
            ),
            arranger_index: pick(keys::NEXT_PUBLIC_ARRANGER_INDEX, DEFAULT_ARRANGER_INDEX),
            arranger_api: pick(keys::NEXT_PUBLIC_ARRANGER_API, DEFAULT_ARRANGER_API),
            base_path: pick(keys::NEXT_PUBLIC_BASE_PATH, DEFAULT_BASE_PATH),
        }
    }

    /// `(attribute name, value)` pairs in record order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            (keys::NEXT_PUBLIC_EGO_API_ROOT, self.ego_api_root.as_str()),
            (keys::NEXT_PUBLIC_EGO_CLIENT_ID, self.ego_client_id.as_str()),
            (keys::NEXT_PUBLIC_EGO_PUBLIC_KEY, self.ego_public_key.as_str()),
            (keys::NEXT_PUBLIC_ARRANGER_PROJECT_ID, self.arranger_project_id.as_str()),
            (keys::NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD, self.arranger_graphql_field.as_str()),
            (keys::NEXT_PUBLIC_ARRANGER_INDEX, self.arranger_index.as_str()),
            (keys::NEXT_PUBLIC_ARRANGER_API, self.arranger_api.as_str()),
            (keys::NEXT_PUBLIC_BASE_PATH, self.base_path.as_str()),
        ]
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// Free-function form of [`PortalConfig::resolve`].
pub fn resolve(raw: Option<&RawConfig>) -> PortalConfig {
    PortalConfig::resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert_eq!(config.ego_api_root, "http://localhost:8088");
        assert_eq!(config.arranger_api, "http://localhost:5050");
        assert_eq!(config.ego_client_id, "");
        assert!(config.ego_public_key.starts_with("-----BEGIN PUBLIC KEY-----\r\n"));
        assert!(config.ego_public_key.ends_with("\r\n-----END PUBLIC KEY-----"));
    }

    #[test]
    fn test_empty_value_falls_back() {
        let raw: RawConfig = [("NEXT_PUBLIC_EGO_API_ROOT", "")].into_iter().collect();
        assert_eq!(resolve(Some(&raw)).ego_api_root, DEFAULT_EGO_API_ROOT);
    }

    #[test]
    fn test_whitespace_value_is_kept() {
        let raw: RawConfig = [("NEXT_PUBLIC_BASE_PATH", " ")].into_iter().collect();
        assert_eq!(resolve(Some(&raw)).base_path, " ");
    }

    #[test]
    fn test_entries_follow_record_order() {
        let config = PortalConfig::default();
        let names: Vec<&str> = config.entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names[0], "NEXT_PUBLIC_EGO_API_ROOT");
        assert_eq!(names[2], "NEXT_PUBLIC_EGO_PUBLIC_KEY");
        assert_eq!(names[7], "NEXT_PUBLIC_BASE_PATH");
    }

    #[test]
    fn test_serializes_with_attribute_names() {
        let json = serde_json::to_value(PortalConfig::default()).unwrap();
        assert_eq!(json["NEXT_PUBLIC_ARRANGER_API"], "http://localhost:5050");
        assert_eq!(json["NEXT_PUBLIC_EGO_PUBLIC_KEY"], DEFAULT_EGO_PUBLIC_KEY);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
