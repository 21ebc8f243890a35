//! Tests for BasicConfigurationValidator.

use super::*;
use crate::SystemDefaults;
use serde_json::json;

fn overrides(value: serde_json::Value) -> UserConfig {
    serde_json::from_value(value).expect("test overrides should fit the schema")
}

// ============================================================================
// Validator Creation Tests
// ============================================================================

#[test]
fn test_validator_creation() {
    let validator = BasicConfigurationValidator::new();
    assert!(std::mem::size_of_val(&validator) == 0); // Zero-sized type
}

#[test]
fn test_system_defaults_are_valid() {
    let validator = BasicConfigurationValidator::new();
    let result = validator.validate_config(SystemDefaults::new().config());

    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_overrides_are_valid() {
    let validator = BasicConfigurationValidator::new();
    assert!(validator.validate_overrides(&UserConfig::default()).is_valid());
}

// ============================================================================
// Security
// ============================================================================

#[test]
fn test_password_length_below_minimum_is_error() {
    let validator = BasicConfigurationValidator::new();
    let result =
        validator.validate_overrides(&overrides(json!({ "security": { "defaultPasswordLength": 7 } })));

    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field_path, "security.defaultPasswordLength");
    assert!(result.errors[0].message.contains("password length"));
}

#[test]
fn test_password_length_at_minimum_is_valid() {
    let validator = BasicConfigurationValidator::new();
    let result =
        validator.validate_overrides(&overrides(json!({ "security": { "defaultPasswordLength": 8 } })));

    assert!(result.is_valid());
}

#[test]
fn test_zero_password_length_is_error() {
    let validator = BasicConfigurationValidator::new();
    let result =
        validator.validate_overrides(&overrides(json!({ "security": { "defaultPasswordLength": 0 } })));

    assert!(!result.is_valid());
}

#[test]
fn test_negative_auto_lock_is_error() {
    let validator = BasicConfigurationValidator::new();
    let result =
        validator.validate_overrides(&overrides(json!({ "security": { "autoLockTimeout": -1 } })));

    assert!(!result.is_valid());
    assert_eq!(result.error_messages(), vec!["Auto-lock timeout cannot be negative"]);
}

#[test]
fn test_zero_auto_lock_is_valid() {
    let validator = BasicConfigurationValidator::new();
    let result =
        validator.validate_overrides(&overrides(json!({ "security": { "autoLockTimeout": 0 } })));

    assert!(result.is_valid());
}

// ============================================================================
// Networking
// ============================================================================

#[test]
fn test_network_timeout_boundary() {
    let validator = BasicConfigurationValidator::new();

    let below =
        validator.validate_overrides(&overrides(json!({ "networking": { "defaultTimeoutMs": 999 } })));
    let at =
        validator.validate_overrides(&overrides(json!({ "networking": { "defaultTimeoutMs": 1000 } })));

    assert!(!below.is_valid());
    assert_eq!(below.error_messages(), vec!["Network timeout must be at least 1000ms"]);
    assert!(at.is_valid());
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_negative_transition_is_warning_only() {
    let validator = BasicConfigurationValidator::new();
    let result = validator
        .validate_overrides(&overrides(json!({ "theme": { "themeTransitionDuration": -50 } })));

    assert!(result.is_valid());
    assert_eq!(
        result.warning_messages(),
        vec!["Theme transition duration should be positive"]
    );
}

// ============================================================================
// Accumulation
// ============================================================================

#[test]
fn test_all_errors_are_accumulated() {
    let validator = BasicConfigurationValidator::new();
    let result = validator.validate_overrides(&overrides(json!({
        "networking": { "defaultTimeoutMs": 10 },
        "security": { "defaultPasswordLength": 4, "autoLockTimeout": -5 },
        "theme": { "themeTransitionDuration": -1 }
    })));

    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 3);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validate_config_reports_invalid_complete_config() {
    let validator = BasicConfigurationValidator::new();
    let mut config = SystemDefaults::new().config().clone();
    config.security.auto_lock_timeout = -10;

    let result = validator.validate_config(&config);

    assert!(!result.is_valid());
    assert_eq!(result.errors[0].field_path, "security.autoLockTimeout");
}
