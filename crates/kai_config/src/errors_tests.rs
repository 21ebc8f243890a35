//! Tests for configuration error types.

use super::*;
use crate::validator::ValidationErrorType;

fn error(path: &str, message: &str) -> ValidationError {
    ValidationError {
        error_type: ValidationErrorType::InvalidValue,
        field_path: path.to_string(),
        message: message.to_string(),
        suggestion: None,
    }
}

#[test]
fn test_validation_failed_counts_errors() {
    let err = ConfigurationError::validation_failed(vec![
        error("security.defaultPasswordLength", "too short"),
        error("networking.defaultTimeoutMs", "too small"),
    ]);

    match err {
        ConfigurationError::ValidationFailed {
            error_count,
            errors,
        } => {
            assert_eq!(error_count, 2);
            assert_eq!(errors.len(), 2);
        }
        _ => panic!("Expected ValidationFailed"),
    }
}

#[test]
fn test_validation_failed_display_joins_all_messages() {
    let err = ConfigurationError::validation_failed(vec![
        error("a", "first problem"),
        error("b", "second problem"),
    ]);

    assert_eq!(
        err.to_string(),
        "Invalid configuration: first problem, second problem"
    );
}

#[test]
fn test_storage_unavailable_display() {
    let err = ConfigurationError::StorageUnavailable {
        key: "user-config".to_string(),
        reason: "permission denied".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "Storage unavailable for key 'user-config': permission denied"
    );
}

#[test]
fn test_invalid_path_display() {
    let err = ConfigurationError::InvalidPath {
        path: "security..x".to_string(),
        reason: "empty segment".to_string(),
    };

    assert!(err.to_string().contains("security..x"));
    assert!(err.to_string().contains("empty segment"));
}

#[test]
fn test_errors_are_comparable() {
    let a = ConfigurationError::ThemeNotFound {
        id: "x".to_string(),
    };
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(
        a,
        ConfigurationError::BuiltInThemeImmutable {
            id: "x".to_string()
        }
    );
}

#[test]
fn test_reserved_theme_id_display() {
    let err = ConfigurationError::ReservedThemeId {
        id: "system".to_string(),
    };

    assert_eq!(err.to_string(), "Theme id is reserved: system");
}
