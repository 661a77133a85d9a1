use super::*;

#[test]
fn default_points_at_local_sign_in_user() {
    assert_eq!(EndpointConfig::default().url(), "http://localhost:3001/SignInUser");
}

#[test]
fn new_strips_trailing_slashes_from_base() {
    let cfg = EndpointConfig::new("https://auth.example.test/", "/SignInUser").unwrap();
    assert_eq!(cfg.base_url, "https://auth.example.test");
    assert_eq!(cfg.url(), "https://auth.example.test/SignInUser");
}

#[test]
fn new_prefixes_missing_leading_slash() {
    let cfg = EndpointConfig::new("http://127.0.0.1:3001", "api/login").unwrap();
    assert_eq!(cfg.path, "/api/login");
}

#[test]
fn new_rejects_empty_base() {
    assert_eq!(EndpointConfig::new("  ", "/SignInUser"), Err(ConfigError::EmptyBaseUrl));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert_eq!(
        EndpointConfig::new("ftp://files.test", "/SignInUser"),
        Err(ConfigError::UnsupportedScheme("ftp://files.test".to_owned()))
    );
}

#[test]
fn new_rejects_empty_path() {
    assert_eq!(EndpointConfig::new("http://localhost:3001", ""), Err(ConfigError::EmptyPath));
    assert_eq!(EndpointConfig::new("http://localhost:3001", "/"), Err(ConfigError::EmptyPath));
}

#[test]
fn overrides_apply_when_valid() {
    let cfg = EndpointConfig::from_overrides(Some("https://auth.test"), None);
    assert_eq!(cfg.url(), "https://auth.test/SignInUser");
}

#[test]
fn invalid_override_falls_back_to_default() {
    let cfg = EndpointConfig::from_overrides(Some("localhost:3001"), Some("/x"));
    assert_eq!(cfg, EndpointConfig::default());
}
