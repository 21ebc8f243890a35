//! Tests for validator types and trait.

use super::*;
use crate::SystemDefaults;

// ============================================================================
// ValidationResult Tests
// ============================================================================

/// Verify new ValidationResult is valid by default.
#[test]
fn test_validation_result_new_is_valid() {
    let result = ValidationResult::new();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

/// Verify validation result is invalid when errors exist.
#[test]
fn test_validation_result_invalid_with_errors() {
    let mut result = ValidationResult::new();
    result.add_error(ValidationError {
        error_type: ValidationErrorType::InvalidValue,
        field_path: "test.field".to_string(),
        message: "Test error".to_string(),
        suggestion: None,
    });

    assert!(!result.is_valid());
    assert_eq!(result.error_messages(), vec!["Test error"]);
}

/// Verify validation result remains valid with only warnings.
#[test]
fn test_validation_result_valid_with_warnings() {
    let mut result = ValidationResult::new();
    result.add_warning(ValidationWarning {
        field_path: "test.field".to_string(),
        message: "Test warning".to_string(),
        recommendation: None,
    });

    assert!(result.is_valid());
    assert_eq!(result.warning_messages(), vec!["Test warning"]);
}

#[test]
fn test_validation_result_bulk_add() {
    let mut result = ValidationResult::default();
    result.add_errors(vec![
        ValidationError {
            error_type: ValidationErrorType::InvalidValue,
            field_path: "a".to_string(),
            message: "first".to_string(),
            suggestion: None,
        },
        ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "b".to_string(),
            message: "second".to_string(),
            suggestion: None,
        },
    ]);
    result.add_warnings(vec![ValidationWarning {
        field_path: "c".to_string(),
        message: "third".to_string(),
        recommendation: None,
    }]);

    assert_eq!(result.error_messages(), vec!["first", "second"]);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_validation_error_type_display() {
    assert_eq!(ValidationErrorType::InvalidValue.to_string(), "InvalidValue");
    assert_eq!(
        ValidationErrorType::RequiredFieldMissing.to_string(),
        "RequiredFieldMissing"
    );
}

// ============================================================================
// Trait default method
// ============================================================================

/// Validator that reports how many sections it was handed.
struct SectionCounter;

impl ConfigurationValidator for SectionCounter {
    fn validate_overrides(&self, config: &UserConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        if config.security.is_some() && config.theme.is_some() {
            result.add_warning(ValidationWarning {
                field_path: String::new(),
                message: "complete".to_string(),
                recommendation: None,
            });
        }
        result
    }
}

#[test]
fn test_validate_config_passes_every_section() {
    let result = SectionCounter.validate_config(SystemDefaults::new().config());
    assert_eq!(result.warning_messages(), vec!["complete"]);
}
