//! Configuration system error types.
//!
//! Domain-specific errors for persisting, mutating, importing and
//! validating application configuration and themes.

use thiserror::Error;

use crate::validator::ValidationError;

/// Configuration system errors.
///
/// Read paths never surface these: a failed load degrades to system
/// defaults. Write paths (`set`, `update`, `reset`, `import`) return them so
/// the caller can retry or tell the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Storage unavailable for key '{key}': {reason}")]
    StorageUnavailable { key: String, reason: String },

    #[error("Stored value for key '{key}' is corrupt: {reason}")]
    StorageCorrupt { key: String, reason: String },

    #[error("Invalid configuration: {}", join_messages(.errors))]
    ValidationFailed {
        error_count: usize,
        errors: Vec<ValidationError>,
    },

    #[error("Invalid configuration path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Value does not fit configuration path '{path}': {reason}")]
    TypeMismatch { path: String, reason: String },

    #[error("Failed to parse configuration: {reason}")]
    ParseError { reason: String },

    #[error("Theme not found: {id}")]
    ThemeNotFound { id: String },

    #[error("Cannot modify built-in theme: {id}")]
    BuiltInThemeImmutable { id: String },

    #[error("Theme id is reserved: {id}")]
    ReservedThemeId { id: String },
}

impl ConfigurationError {
    /// Builds a `ValidationFailed` error from a list of validation errors.
    pub fn validation_failed(errors: Vec<ValidationError>) -> Self {
        Self::ValidationFailed {
            error_count: errors.len(),
            errors,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
