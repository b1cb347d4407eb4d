//! Unit tests for client configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "http://localhost:5000");
    assert_eq!(config.credentials, CredentialMode::Cookie);
    assert_eq!(config.probe, ProbeEndpoint::Profile);
    assert_eq!(config.auth_failure, AuthFailurePolicy::ShowError);
}

#[test]
fn test_url_joins_without_double_slash() {
    let config = ClientConfig {
        api_base: "http://api.local:5000/".to_string(),
        ..Default::default()
    };
    assert_eq!(config.url("/api/users"), "http://api.local:5000/api/users");
    assert_eq!(config.url(&endpoints::user_path(4)), "http://api.local:5000/api/users/4");
}

#[test]
fn test_overrides_apply_and_skip_invalid() {
    let config = ClientConfig::default().with_overrides([
        ("api_base", Some("https://events.example")),
        ("credentials", Some("bearer")),
        ("probe", Some("/api/user/role")),
        ("auth_failure", Some("nonsense")),
        ("token_key", None),
        ("unknown", Some("x")),
    ]);
    assert_eq!(config.api_base, "https://events.example");
    assert_eq!(config.credentials, CredentialMode::Bearer);
    assert_eq!(config.probe, ProbeEndpoint::UserRole);
    assert_eq!(config.auth_failure, AuthFailurePolicy::ShowError);
    assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config: ClientConfig = serde_json::from_str(r#"{"auth_failure": "redirect_home"}"#).unwrap();
    assert_eq!(config.auth_failure, AuthFailurePolicy::RedirectHome);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn test_probe_paths() {
    assert_eq!(ProbeEndpoint::Profile.path(), "/api/user/profile");
    assert_eq!(ProbeEndpoint::CheckRole.path(), "/api/check_role");
    assert!(ProbeEndpoint::CheckRole.reports_role());
    assert!(!ProbeEndpoint::Profile.reports_role());
}
