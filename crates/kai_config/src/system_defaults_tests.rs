//! Tests for the system defaults.

use super::*;
use serde_json::json;

#[test]
fn test_defaults_version() {
    let defaults = SystemDefaults::new();
    assert_eq!(defaults.version(), SYSTEM_CONFIG_VERSION);
}

#[test]
fn test_defaults_match_documented_values() {
    let defaults = SystemDefaults::default();
    let config = defaults.config();

    assert_eq!(config.networking.local_ip, "localhost");
    assert_eq!(config.networking.remote_ip, "");
    assert_eq!(config.networking.default_timeout_ms, 15_000);
    assert_eq!(config.ui.default_theme, ThemeMode::Dark);
    assert!(!config.developer.feature_flags.enable_graph_execution_ui);
    assert_eq!(config.security.auto_lock_timeout, 15);
    assert_eq!(config.security.default_password_length, 16);
    assert_eq!(config.theme.default_color_scheme, "dark-mode-elite");
}

/// JSON field names are what dotted paths address, so pin them.
#[test]
fn test_defaults_serialize_with_camel_case_keys() {
    let value = serde_json::to_value(SystemDefaults::new().config()).unwrap();

    assert_eq!(value["security"]["autoLockTimeout"], json!(15));
    assert_eq!(value["networking"]["defaultTimeoutMs"], json!(15000));
    assert_eq!(value["services"]["defaultOpenWebUIModel"], json!("gemma:latest"));
    assert_eq!(value["services"]["defaultA1111Model"], json!(""));
    assert_eq!(
        value["developer"]["featureFlags"]["enableGraphExecutionUi"],
        json!(false)
    );
    assert_eq!(value["ui"]["defaultTheme"], json!("dark"));
    assert_eq!(value["logging"]["level"], json!("info"));
}

#[test]
fn test_with_config_keeps_custom_baseline() {
    let mut config = SystemDefaults::new().config().clone();
    config.security.auto_lock_timeout = 5;

    let defaults = SystemDefaults::with_config(config, "2.0.0");

    assert_eq!(defaults.config().security.auto_lock_timeout, 5);
    assert_eq!(defaults.version(), "2.0.0");
}
