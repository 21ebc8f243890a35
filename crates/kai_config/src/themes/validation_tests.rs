use super::*;
use crate::themes::palette::ThemeColorPalette;
use serde_json::json;

fn draft(name: &str, colors: serde_json::Value) -> ThemeDraft {
    ThemeDraft {
        name: Some(name.to_string()),
        description: Some("A theme".to_string()),
        colors: Some(colors),
    }
}

#[test]
fn test_complete_theme_is_valid() {
    let colors = serde_json::to_value(ThemeColorPalette::default_dark()).unwrap();
    let result = validate_theme(&draft("Midnight", colors));

    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_blank_name_and_missing_colors() {
    let result = validate_theme(&ThemeDraft {
        name: Some("   ".to_string()),
        description: None,
        colors: None,
    });

    assert_eq!(
        result.error_messages(),
        vec!["Theme name is required", "Theme colors are required"]
    );
    assert_eq!(result.warning_messages(), vec!["Consider adding a description"]);
}

#[test]
fn test_missing_and_malformed_required_colors() {
    let colors = json!({
        "background": { "primary": "#000", "secondary": "navy" },
        "text": { "primary": "#fff", "secondary": "" },
        "interactive": {}
    });

    let result = validate_theme(&draft("Partial", colors));

    assert_eq!(
        result.error_messages(),
        vec![
            "Invalid color format for background.secondary: navy",
            "Missing required color: text.secondary",
            "Missing required color: interactive.primary",
        ]
    );
    assert_eq!(result.errors[0].field_path, "colors.background.secondary");
    assert_eq!(result.errors[0].error_type, ValidationErrorType::InvalidValue);
}

#[test]
fn test_long_name_warns() {
    let colors = serde_json::to_value(ThemeColorPalette::default_light()).unwrap();
    let result = validate_theme(&draft(&"x".repeat(51), colors));

    assert!(result.is_valid());
    assert_eq!(result.warning_messages(), vec!["Theme name is quite long"]);
}
