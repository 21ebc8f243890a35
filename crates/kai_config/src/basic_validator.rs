//! Basic implementation of configuration validation.
//!
//! Section rules:
//! - `networking.defaultTimeoutMs` must be at least 1000 (error)
//! - `security.defaultPasswordLength` must be at least 8 (error)
//! - `security.autoLockTimeout` must not be negative (error)
//! - `theme.themeTransitionDuration` should not be negative (warning)
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{BasicConfigurationValidator, ConfigurationValidator, UserConfig};
//! use kai_config::settings::SecurityOverrides;
//!
//! let validator = BasicConfigurationValidator::new();
//! let config = UserConfig {
//!     security: Some(SecurityOverrides {
//!         default_password_length: Some(7),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let result = validator.validate_overrides(&config);
//! assert!(!result.is_valid());
//! ```

use crate::{
    app_config::UserConfig,
    settings::{NetworkingOverrides, SecurityOverrides, ThemeOverrides},
    validator::{
        ConfigurationValidator, ValidationError, ValidationErrorType, ValidationResult,
        ValidationWarning,
    },
};

/// Smallest accepted network timeout in milliseconds.
pub const MIN_NETWORK_TIMEOUT_MS: i64 = 1000;

/// Shortest accepted generated password.
pub const MIN_PASSWORD_LENGTH: i64 = 8;

/// Basic implementation of configuration validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicConfigurationValidator;

impl BasicConfigurationValidator {
    /// Create a new basic configuration validator.
    pub fn new() -> Self {
        Self
    }

    fn validate_networking(&self, settings: &NetworkingOverrides) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(timeout) = settings.default_timeout_ms {
            if timeout < MIN_NETWORK_TIMEOUT_MS {
                errors.push(ValidationError {
                    error_type: ValidationErrorType::InvalidValue,
                    field_path: "networking.defaultTimeoutMs".to_string(),
                    message: format!(
                        "Network timeout must be at least {}ms",
                        MIN_NETWORK_TIMEOUT_MS
                    ),
                    suggestion: Some(format!("Use {} or more, got: {}", MIN_NETWORK_TIMEOUT_MS, timeout)),
                });
            }
        }

        errors
    }

    fn validate_security(&self, settings: &SecurityOverrides) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Some(length) = settings.default_password_length {
            if length < MIN_PASSWORD_LENGTH {
                errors.push(ValidationError {
                    error_type: ValidationErrorType::InvalidValue,
                    field_path: "security.defaultPasswordLength".to_string(),
                    message: format!(
                        "Default password length must be at least {} characters",
                        MIN_PASSWORD_LENGTH
                    ),
                    suggestion: Some(format!("Use {} or more, got: {}", MIN_PASSWORD_LENGTH, length)),
                });
            }
        }

        if let Some(timeout) = settings.auto_lock_timeout {
            if timeout < 0 {
                errors.push(ValidationError {
                    error_type: ValidationErrorType::InvalidValue,
                    field_path: "security.autoLockTimeout".to_string(),
                    message: "Auto-lock timeout cannot be negative".to_string(),
                    suggestion: Some("Use 0 to disable auto-lock".to_string()),
                });
            }
        }

        errors
    }

    fn validate_theme(&self, settings: &ThemeOverrides) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if let Some(duration) = settings.theme_transition_duration {
            if duration < 0 {
                warnings.push(ValidationWarning {
                    field_path: "theme.themeTransitionDuration".to_string(),
                    message: "Theme transition duration should be positive".to_string(),
                    recommendation: Some("Use 0 to switch themes instantly".to_string()),
                });
            }
        }

        warnings
    }
}

impl ConfigurationValidator for BasicConfigurationValidator {
    fn validate_overrides(&self, config: &UserConfig) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(networking) = &config.networking {
            result.add_errors(self.validate_networking(networking));
        }
        if let Some(security) = &config.security {
            result.add_errors(self.validate_security(security));
        }
        if let Some(theme) = &config.theme {
            result.add_warnings(self.validate_theme(theme));
        }

        result
    }
}

#[cfg(test)]
#[path = "basic_validator_tests.rs"]
mod tests;
