use std::io::Write;

use scene_nav::config::{Config, ConfigError};
use scene_nav::ui::scenes::app::AppRouteTag;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.deep_link.scheme, "tca20221220");
    assert_eq!(config.deep_link.fallback, "intermediate-b/leaf");
    assert_eq!(config.store.max_follow_ups, 64);
    assert_eq!(config.store.diagnostics_capacity, 256);
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("scene-nav/config.toml"));
}

/// Test that a missing file yields the defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

/// Test that partial files fall back to per-field defaults.
#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config(
        r#"
[deep_link]
scheme = "myapp"

[store]
max_follow_ups = 8
"#,
    );
    let config = Config::load_from(file.path()).expect("valid config");
    assert_eq!(config.deep_link.scheme, "myapp");
    assert_eq!(config.deep_link.fallback, "intermediate-b/leaf");
    assert_eq!(config.store.max_follow_ups, 8);
    assert_eq!(config.store.diagnostics_capacity, 256);
}

/// Test that the adapter honours the configured scheme and fallback.
#[test]
fn test_adapter_from_config() {
    let file = write_config(
        r#"
[deep_link]
scheme = "myapp"
fallback = "intermediate-a"
"#,
    );
    let config = Config::load_from(file.path()).expect("valid config");
    let adapter = config.deep_link_adapter().expect("adapter");
    assert_eq!(adapter.scheme(), "myapp");

    let target = adapter.resolve("myapp://nothing").expect("fallback");
    assert_eq!(target.intermediate, AppRouteTag::IntermediateA);
    assert!(!target.leaf);
    assert!(adapter.resolve("tca20221220://nothing").is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[deep_link\nscheme = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_scheme() {
    for scheme in ["", "1abc", "has space", "under_score"] {
        let mut config = Config::default();
        config.deep_link.scheme = scheme.to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }), "{scheme}");
    }
}

#[test]
fn test_validation_rejects_unknown_fallback() {
    let mut config = Config::default();
    config.deep_link.fallback = "settings".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Invalid deep link fallback"));
}

#[test]
fn test_validation_rejects_zero_limits() {
    let mut config = Config::default();
    config.store.max_follow_ups = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.store.diagnostics_capacity = 0;
    assert!(config.validate().is_err());
}
