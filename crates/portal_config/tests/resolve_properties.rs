//! Resolver behavior over absent, empty, partial and full mappings.

use portal_config::defaults::*;
use portal_config::{keys, resolve, PortalConfig, RawConfig};

/// (source key, default, accessor) for every attribute.
fn attributes() -> [(&'static str, &'static str, fn(&PortalConfig) -> &str); 8] {
    [
        (keys::NEXT_PUBLIC_EGO_API_ROOT, DEFAULT_EGO_API_ROOT, |c| c.ego_api_root.as_str()),
        (keys::NEXT_PUBLIC_EGO_CLIENT_ID, DEFAULT_EGO_CLIENT_ID, |c| c.ego_client_id.as_str()),
        (keys::EGO_PUBLIC_KEY, DEFAULT_EGO_PUBLIC_KEY, |c| c.ego_public_key.as_str()),
        (keys::NEXT_PUBLIC_ARRANGER_PROJECT_ID, DEFAULT_ARRANGER_PROJECT_ID, |c| c.arranger_project_id.as_str()),
        (keys::NEXT_PUBLIC_ARRANGER_GRAPHQL_FIELD, DEFAULT_ARRANGER_GRAPHQL_FIELD, |c| c.arranger_graphql_field.as_str()),
        (keys::NEXT_PUBLIC_ARRANGER_INDEX, DEFAULT_ARRANGER_INDEX, |c| c.arranger_index.as_str()),
        (keys::NEXT_PUBLIC_ARRANGER_API, DEFAULT_ARRANGER_API, |c| c.arranger_api.as_str()),
        (keys::NEXT_PUBLIC_BASE_PATH, DEFAULT_BASE_PATH, |c| c.base_path.as_str()),
    ]
}

#[test]
fn test_supplied_values_override_defaults() {
    for (key, _, get) in attributes() {
        let value = format!("value-for-{}", key);
        let raw: RawConfig = [(key, value.as_str())].into_iter().collect();
        let config = resolve(Some(&raw));
        assert_eq!(get(&config), value, "{} should be taken from the mapping", key);
    }
}

#[test]
fn test_missing_or_empty_values_use_defaults() {
    let empty_values: RawConfig = keys::SOURCE_KEYS.iter().map(|k| (*k, "")).collect();
    let cases = [
        ("absent mapping", None),
        ("empty mapping", Some(RawConfig::new())),
        ("empty strings", Some(empty_values)),
    ];

    for (label, raw) in &cases {
        let config = resolve(raw.as_ref());
        for (key, default, get) in attributes() {
            assert_eq!(get(&config), default, "{}: {} should use its default", label, key);
        }
    }
}

#[test]
fn test_absent_mapping_matches_default() {
    assert_eq!(resolve(None), PortalConfig::default());
}

#[test]
fn test_public_key_reads_ego_public_key() {
    let raw: RawConfig = [("EGO_PUBLIC_KEY", "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----")]
        .into_iter()
        .collect();
    assert_eq!(
        resolve(Some(&raw)).ego_public_key,
        "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----"
    );
}

#[test]
fn test_public_key_ignores_output_name() {
    let raw: RawConfig = [("NEXT_PUBLIC_EGO_PUBLIC_KEY", "not-used")].into_iter().collect();
    assert_eq!(resolve(Some(&raw)).ego_public_key, DEFAULT_EGO_PUBLIC_KEY);
}

#[test]
fn test_partial_mapping_overrides_one_field() {
    let raw: RawConfig = [("NEXT_PUBLIC_EGO_CLIENT_ID", "portal-ui")].into_iter().collect();
    let config = resolve(Some(&raw));

    let expected = PortalConfig {
        ego_client_id: "portal-ui".to_string(),
        ..PortalConfig::default()
    };
    assert_eq!(config, expected);
}

#[test]
fn test_resolve_is_idempotent_and_leaves_input_untouched() {
    let raw: RawConfig = [
        ("NEXT_PUBLIC_ARRANGER_API", "http://arranger:5050"),
        ("NEXT_PUBLIC_ARRANGER_INDEX", ""),
    ]
    .into_iter()
    .collect();
    let before = raw.clone();

    let first = resolve(Some(&raw));
    let second = resolve(Some(&raw));

    assert_eq!(first, second);
    assert_eq!(raw, before);
}

#[test]
fn test_resolve_from_threads() {
    let raw: RawConfig = [("NEXT_PUBLIC_BASE_PATH", "/portal")].into_iter().collect();
    let expected = resolve(Some(&raw));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| resolve(Some(&raw)))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
