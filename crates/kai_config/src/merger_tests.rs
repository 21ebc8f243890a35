//! Tests for configuration merging engine.

use super::*;
use crate::AppConfig;
use serde_json::{json, Value};

// ============================================================================
// Test Helpers
// ============================================================================

/// Reference deep merge over plain JSON objects.
///
/// Nested objects merge key by key; anything else replaces the target.
fn json_deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                let nested = source_value.is_object()
                    && target_map.get(key).map(Value::is_object).unwrap_or(false);
                if nested {
                    if let Some(existing) = target_map.get_mut(key) {
                        json_deep_merge(existing, source_value);
                    }
                } else {
                    target_map.insert(key.clone(), source_value.clone());
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

fn overrides_from(value: Value) -> UserConfig {
    serde_json::from_value(value).expect("test overrides should fit the schema")
}

/// Several override documents covering single leaves, whole sections,
/// nested flags and multiple sections at once.
fn sample_overrides() -> Vec<Value> {
    vec![
        json!({}),
        json!({ "security": { "autoLockTimeout": 30 } }),
        json!({ "networking": { "remoteIp": "10.0.0.5", "defaultTimeoutMs": 30000 } }),
        json!({ "developer": { "featureFlags": { "enableGraphExecutionUi": true } } }),
        json!({ "developer": { "logLevel": "debug" }, "logging": { "level": "silent" } }),
        json!({
            "ui": { "defaultTheme": "light", "showCategoryHeaders": false },
            "theme": { "defaultColorScheme": "teal-wave" },
            "services": { "defaultOllamaModel": "llama3:8b" }
        }),
    ]
}

// ============================================================================
// Creation Tests
// ============================================================================

#[test]
fn test_merger_creation() {
    let merger = ConfigurationMerger::new();
    assert!(format!("{:?}", merger).contains("ConfigurationMerger"));
}

// ============================================================================
// merge
// ============================================================================

#[test]
fn test_merge_with_empty_overrides_equals_defaults() {
    let merger = ConfigurationMerger::new();
    let defaults = SystemDefaults::new();

    let merged = merger.merge(&defaults, &UserConfig::default());

    assert_eq!(&merged.config, defaults.config());
    assert_eq!(merged.metadata.source, ConfigurationSource::Merged);
    assert_eq!(merged.source_trace.field_count(), 0);
}

/// Every present leaf overrides, every absent leaf falls back.
#[test]
fn test_merge_matches_reference_deep_merge() {
    let merger = ConfigurationMerger::new();
    let defaults = SystemDefaults::new();

    for overrides_json in sample_overrides() {
        let overrides = overrides_from(overrides_json.clone());
        let merged = merger.merge(&defaults, &overrides);

        let mut expected = serde_json::to_value(defaults.config()).unwrap();
        json_deep_merge(&mut expected, &overrides_json);
        let expected: AppConfig = serde_json::from_value(expected).unwrap();

        assert_eq!(
            merged.config, expected,
            "merge should match deep merge for {}",
            overrides_json
        );
    }
}

#[test]
fn test_merge_single_leaf_keeps_section_siblings() {
    let merger = ConfigurationMerger::new();
    let defaults = SystemDefaults::new();
    let overrides = overrides_from(json!({ "security": { "autoLockTimeout": 30 } }));

    let merged = merger.merge(&defaults, &overrides);

    assert_eq!(merged.config.security.auto_lock_timeout, 30);
    assert_eq!(merged.config.security.default_password_length, 16);
    assert_eq!(merged.config.security.encryption_algorithm, "AES-GCM");
    assert_eq!(merged.config.security.hash_iterations, 100_000);
}

#[test]
fn test_merge_records_overridden_paths() {
    let merger = ConfigurationMerger::new();
    let overrides = overrides_from(json!({
        "security": { "autoLockTimeout": 30 },
        "developer": { "featureFlags": { "enableGraphExecutionUi": true } }
    }));

    let merged = merger.merge(&SystemDefaults::new(), &overrides);

    assert_eq!(
        merged.source_trace.overridden_fields(),
        vec![
            "developer.featureFlags.enableGraphExecutionUi",
            "security.autoLockTimeout"
        ]
    );
}

/// An override equal to the default is still an override.
#[test]
fn test_merge_records_override_equal_to_default() {
    let merger = ConfigurationMerger::new();
    let overrides = overrides_from(json!({ "ui": { "defaultTheme": "dark" } }));

    let merged = merger.merge(&SystemDefaults::new(), &overrides);

    assert!(merged.is_user_override("ui.defaultTheme"));
}

// ============================================================================
// merge_overrides
// ============================================================================

#[test]
fn test_merge_overrides_combines_sections() {
    let merger = ConfigurationMerger::new();
    let base = overrides_from(json!({ "security": { "autoLockTimeout": 30 } }));
    let updates = overrides_from(json!({ "networking": { "remoteIp": "192.168.1.2" } }));

    let result = merger.merge_overrides(&base, &updates);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "networking": { "remoteIp": "192.168.1.2" },
            "security": { "autoLockTimeout": 30 }
        })
    );
}

#[test]
fn test_merge_overrides_merges_within_section() {
    let merger = ConfigurationMerger::new();
    let base = overrides_from(json!({
        "security": { "autoLockTimeout": 30, "encryptionAlgorithm": "AES-CBC" }
    }));
    let updates = overrides_from(json!({
        "security": { "autoLockTimeout": 45, "hashIterations": 200000 }
    }));

    let result = merger.merge_overrides(&base, &updates);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "security": {
                "autoLockTimeout": 45,
                "encryptionAlgorithm": "AES-CBC",
                "hashIterations": 200000
            }
        })
    );
}

#[test]
fn test_merge_overrides_merges_feature_flags() {
    let merger = ConfigurationMerger::new();
    let base = overrides_from(json!({ "developer": { "loadDefaultServices": false } }));
    let updates = overrides_from(json!({
        "developer": { "featureFlags": { "enableGraphExecutionUi": true } }
    }));

    let result = merger.merge_overrides(&base, &updates);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "developer": {
                "loadDefaultServices": false,
                "featureFlags": { "enableGraphExecutionUi": true }
            }
        })
    );
}

#[test]
fn test_merge_overrides_with_empty_updates_is_identity() {
    let merger = ConfigurationMerger::new();
    let base = overrides_from(json!({ "theme": { "customThemesEnabled": false } }));

    let result = merger.merge_overrides(&base, &UserConfig::default());

    assert_eq!(result, base);
}
