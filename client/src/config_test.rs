use super::*;

#[test]
fn from_values_uses_defaults_when_unset() {
    let config = ClientConfig::from_values(None, None);
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.storage_base_url, DEFAULT_STORAGE_URL);
    assert_eq!(config.admin_prefix, "/admin");
    assert_eq!(config.login_path, "/admin/login");
}

#[test]
fn from_values_trims_trailing_slashes() {
    let config = ClientConfig::from_values(Some("https://api.henart.test/api/"), Some("https://cdn.henart.test//"));
    assert_eq!(config.api_base_url, "https://api.henart.test/api");
    assert_eq!(config.storage_base_url, "https://cdn.henart.test");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let config = ClientConfig::from_values(Some("   "), Some(""));
    assert_eq!(config, ClientConfig::default());
}
