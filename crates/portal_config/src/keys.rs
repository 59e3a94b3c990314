//! Key names in the public runtime configuration.
//!
//! Most attributes of [`crate::PortalConfig`] are read from a source key with the
//! same name. The public key is the exception: it is populated from
//! [`EGO_PUBLIC_KEY`], not from [`NEXT_PUBLIC_EGO_PUBLIC_KEY`].

pub const NEXT_PUBLIC_EGO_API_ROOT: &str = "NEXT_PUBLIC_EGO_API_ROOT";
pub const NEXT_PUBLIC_EGO_CLIENT_ID: &str = "NEXT_PUBLIC_EGO_CLIENT_ID";
/// Output attribute name only. Never read from a source mapping.
pub const NEXT_PUBLIC_EGO_PUBLIC_KEY: &str = "NEXT_PUBLIC_EGO_PUBLIC_KEY";
pub const NEXT_PUBLIC_ARRANGER_PROJECT_ID: &str = "NEXT_PUBLIC_ARRANGER_PROJECT_ID";
pub const NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD: &str = "NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD";
pub const NEXT_PUBLIC_ARRANGER_INDEX: &str = "NEXT_PUBLIC_ARRANGER_INDEX";
pub const NEXT_PUBLIC_ARRANGER_API: &str = "NEXT_PUBLIC_ARRANGER_API";
pub const NEXT_PUBLIC_BASE_PATH: &str = "NEXT_PUBLIC_BASE_PATH";

/// Source key for the public key attribute.
pub const EGO_PUBLIC_KEY: &str = "EGO_PUBLIC_KEY";

/// Every key the resolver reads, in record order.
pub const SOURCE_KEYS: [&str; 8] = [
    NEXT_PUBLIC_EGO_API_ROOT,
    NEXT_PUBLIC_EGO_CLIENT_ID,
    EGO_PUBLIC_KEY,
    NEXT_PUBLIC_ARRANGER_PROJECT_ID,
    NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD,
    NEXT_PUBLIC_ARRANGER_INDEX,
    NEXT_PUBLIC_ARRANGER_API,
    NEXT_PUBLIC_BASE_PATH,
];

/// Returns true if the resolver reads `key`.
pub fn is_source_key(key: &str) -> bool {
    SOURCE_KEYS.contains(&key)
}
