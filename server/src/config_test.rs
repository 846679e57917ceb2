use std::collections::HashMap;

use super::*;

fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    assert_eq!(load(&[]).unwrap(), ServerConfig::default());
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = load(&[("PORT", "  "), ("CONTENT_SECURITY_POLICY", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.content_security_policy, None);
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn reads_every_variable() {
    let cfg = load(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://api.example.com/"),
        ("PROXY_TIMEOUT_SECS", "5"),
        ("CONTENT_SECURITY_POLICY", "default-src 'self'"),
        ("PUBLIC_SITE_URL", "https://cowork.example.com/"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream_url, "https://api.example.com");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
    assert_eq!(cfg.content_security_policy.as_deref(), Some("default-src 'self'"));
    assert_eq!(cfg.public_site_url.as_deref(), Some("https://cowork.example.com"));
}

#[test]
fn rejects_bad_port() {
    assert_eq!(load(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(load(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn rejects_upstream_without_scheme_or_host() {
    assert!(matches!(load(&[("API_UPSTREAM_URL", "api.example.com")]), Err(ConfigError::InvalidUpstream(_))));
    assert!(matches!(load(&[("API_UPSTREAM_URL", "https://")]), Err(ConfigError::InvalidUpstream(_))));
}

#[test]
fn rejects_zero_or_garbage_timeout() {
    assert_eq!(load(&[("PROXY_TIMEOUT_SECS", "0")]), Err(ConfigError::InvalidTimeout("0".into())));
    assert_eq!(load(&[("PROXY_TIMEOUT_SECS", "soon")]), Err(ConfigError::InvalidTimeout("soon".into())));
}

#[test]
fn rejects_policy_with_control_characters() {
    assert_eq!(load(&[("CONTENT_SECURITY_POLICY", "default-src\n'self'")]), Err(ConfigError::InvalidPolicy));
}
