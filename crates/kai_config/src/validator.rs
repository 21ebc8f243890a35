//! Configuration validation types and trait.
//!
//! This module provides the core validation infrastructure: the
//! `ConfigurationValidator` trait, the `ValidationResult` it returns, and
//! the error and warning structures collected in it.
//!
//! Errors block imports. Warnings are advisory and never block anything.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ValidationResult, ValidationError, ValidationErrorType};
//!
//! let mut result = ValidationResult::new();
//!
//! result.add_error(ValidationError {
//!     error_type: ValidationErrorType::InvalidValue,
//!     field_path: "security.defaultPasswordLength".to_string(),
//!     message: "Default password length must be at least 8 characters".to_string(),
//!     suggestion: Some("Use a length of 8 or more".to_string()),
//! });
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.errors.len(), 1);
//! ```

use crate::app_config::{AppConfig, UserConfig};

/// Result of configuration validation.
///
/// Validation is considered successful only if no errors are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// List of validation errors (blocking issues).
    pub errors: Vec<ValidationError>,
    /// List of validation warnings (non-blocking suggestions).
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a new empty validation result.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add a validation error.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a validation warning.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Add multiple errors at once.
    pub fn add_errors(&mut self, errors: Vec<ValidationError>) {
        self.errors.extend(errors);
    }

    /// Add multiple warnings at once.
    pub fn add_warnings(&mut self, warnings: Vec<ValidationWarning>) {
        self.warnings.extend(warnings);
    }

    /// Error messages in the order they were found.
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Warning messages in the order they were found.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Individual validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The category of validation error.
    pub error_type: ValidationErrorType,
    /// Dot-separated path to the field that failed validation.
    pub field_path: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    pub suggestion: Option<String>,
}

/// Validation error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorType {
    /// A required field is missing or empty.
    RequiredFieldMissing,
    /// A field value is out of range or malformed.
    InvalidValue,
}

impl std::fmt::Display for ValidationErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequiredFieldMissing => write!(f, "RequiredFieldMissing"),
            Self::InvalidValue => write!(f, "InvalidValue"),
        }
    }
}

/// Non-blocking validation warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Dot-separated path to the field that triggered the warning.
    pub field_path: String,
    /// Human-readable warning message.
    pub message: String,
    /// Optional recommendation.
    pub recommendation: Option<String>,
}

/// Configuration validation service.
///
/// Implementations check every present leaf and collect all errors and
/// warnings in a single pass. Validation is pure: no I/O, no state.
///
/// # Examples
///
/// ```rust
/// use kai_config::{ConfigurationValidator, UserConfig, ValidationResult};
///
/// struct AcceptEverything;
///
/// impl ConfigurationValidator for AcceptEverything {
///     fn validate_overrides(&self, _config: &UserConfig) -> ValidationResult {
///         ValidationResult::new()
///     }
/// }
///
/// assert!(AcceptEverything.validate_overrides(&UserConfig::default()).is_valid());
/// ```
pub trait ConfigurationValidator: Send + Sync {
    /// Validate a sparse configuration.
    ///
    /// Only the leaves that are present are checked, so the same rules apply
    /// to imports, batch updates and complete configurations.
    fn validate_overrides(&self, config: &UserConfig) -> ValidationResult;

    /// Validate a complete configuration.
    fn validate_config(&self, config: &AppConfig) -> ValidationResult {
        self.validate_overrides(&UserConfig::from(config))
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
