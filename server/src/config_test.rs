use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_explicit_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn port_rejects_garbage_and_zero() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".into() }));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort { value: "0".into() }));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { value: "70000".into() }));
}

#[test]
fn assets_dir_defaults_to_public() {
    assert_eq!(parse_assets_dir(None), PathBuf::from("public"));
    assert_eq!(parse_assets_dir(Some("")), PathBuf::from("public"));
    assert_eq!(parse_assets_dir(Some("/srv/henart")), PathBuf::from("/srv/henart"));
}

#[test]
fn invalid_port_message_names_the_value() {
    let err = ConfigError::InvalidPort { value: "abc".into() };
    assert_eq!(err.to_string(), "invalid PORT 'abc': expected 1-65535");
}
