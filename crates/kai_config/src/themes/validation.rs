//! Theme validation.
//!
//! Shares [`ValidationResult`] with configuration validation so callers
//! handle both the same way.

use super::palette::is_valid_color;
use super::theme::ThemeDraft;
use crate::validator::{ValidationError, ValidationErrorType, ValidationResult, ValidationWarning};

/// Colours every theme must define.
pub const REQUIRED_COLORS: &[&str] = &[
    "background.primary",
    "background.secondary",
    "text.primary",
    "text.secondary",
    "interactive.primary",
];

/// Names longer than this get a warning.
pub const MAX_THEME_NAME_LENGTH: usize = 50;

/// Checks a theme's name and required colours.
///
/// Errors: blank name, missing colours, a missing or malformed required
/// colour. Warnings: a long name, no description.
pub fn validate_theme(draft: &ThemeDraft) -> ValidationResult {
    let mut result = ValidationResult::new();

    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        result.add_error(ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "name".to_string(),
            message: "Theme name is required".to_string(),
            suggestion: None,
        });
    }

    match draft.colors.as_ref().filter(|colors| !colors.is_null()) {
        None => result.add_error(ValidationError {
            error_type: ValidationErrorType::RequiredFieldMissing,
            field_path: "colors".to_string(),
            message: "Theme colors are required".to_string(),
            suggestion: None,
        }),
        Some(colors) => {
            for key in REQUIRED_COLORS {
                let color = key
                    .split('.')
                    .try_fold(colors, |value, segment| value.get(segment))
                    .and_then(|value| value.as_str())
                    .filter(|color| !color.is_empty());

                match color {
                    None => result.add_error(ValidationError {
                        error_type: ValidationErrorType::RequiredFieldMissing,
                        field_path: format!("colors.{}", key),
                        message: format!("Missing required color: {}", key),
                        suggestion: None,
                    }),
                    Some(color) if !is_valid_color(color) => result.add_error(ValidationError {
                        error_type: ValidationErrorType::InvalidValue,
                        field_path: format!("colors.{}", key),
                        message: format!("Invalid color format for {}: {}", key, color),
                        suggestion: Some(
                            "Use #rgb, #rrggbb, rgb(), rgba(), hsl() or hsla()".to_string(),
                        ),
                    }),
                    Some(_) => {}
                }
            }
        }
    }

    if let Some(name) = &draft.name {
        if name.chars().count() > MAX_THEME_NAME_LENGTH {
            result.add_warning(ValidationWarning {
                field_path: "name".to_string(),
                message: "Theme name is quite long".to_string(),
                recommendation: Some(format!(
                    "Keep names under {} characters",
                    MAX_THEME_NAME_LENGTH
                )),
            });
        }
    }

    if draft.description.as_deref().unwrap_or_default().is_empty() {
        result.add_warning(ValidationWarning {
            field_path: "description".to_string(),
            message: "Consider adding a description".to_string(),
            recommendation: None,
        });
    }

    result
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
