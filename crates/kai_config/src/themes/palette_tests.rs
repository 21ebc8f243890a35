use super::*;

#[test]
fn test_is_valid_color_accepts_css_forms() {
    for color in [
        "#fff",
        "#0F0F23",
        "rgb(1, 2, 3)",
        "rgba(15, 15, 35, 0.95)",
        "hsl(200, 50%, 50%)",
        "hsla(200, 50%, 50%, 0.5)",
        "transparent",
        "currentColor",
        "inherit",
    ] {
        assert!(is_valid_color(color), "'{}' should be accepted", color);
    }
}

#[test]
fn test_is_valid_color_rejects_other_strings() {
    for color in ["", "#ffff", "#ggg", "red", "0f0f23", "rgb 1 2 3", "currentcolor"] {
        assert!(!is_valid_color(color), "'{}' should be rejected", color);
    }
}

#[test]
fn test_hex_to_rgb() {
    assert_eq!(hex_to_rgb("#0f0f23"), Some((15, 15, 35)));
    assert_eq!(hex_to_rgb("FFFFFF"), Some((255, 255, 255)));
    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("#12345z"), None);
}

#[test]
fn test_default_palettes_brightness() {
    assert!(ThemeColorPalette::default_dark().is_dark());
    assert!(!ThemeColorPalette::default_light().is_dark());
    assert_eq!(ThemeColorPalette::default_for(true), ThemeColorPalette::default_dark());
}

#[test]
fn test_unparsable_background_counts_as_dark() {
    let mut palette = ThemeColorPalette::default_light();
    palette.background.primary = "rgb(255, 255, 255)".to_string();

    assert!(palette.is_dark());
}

#[test]
fn test_palette_serializes_camel_case() {
    let value = serde_json::to_value(ThemeColorPalette::default_dark()).unwrap();

    assert_eq!(value["interactive"]["primaryHover"], "#3fb3b1");
    assert_eq!(value["background"]["primary"], "#0f0f23");
}

#[test]
fn test_overlaid_with_keeps_unsupplied_colors() {
    let partial = serde_json::json!({
        "background": { "primary": "#112233" },
        "interactive": { "primary": "#abcdef" }
    });

    let palette = ThemeColorPalette::default_dark().overlaid_with(&partial).unwrap();

    let defaults = ThemeColorPalette::default_dark();
    assert_eq!(palette.background.primary, "#112233");
    assert_eq!(palette.background.secondary, defaults.background.secondary);
    assert_eq!(palette.interactive.primary, "#abcdef");
    assert_eq!(palette.interactive.primary_hover, defaults.interactive.primary_hover);
    assert_eq!(palette.shadow, defaults.shadow);
}

#[test]
fn test_overlaid_with_rejects_wrong_types() {
    let partial = serde_json::json!({ "text": { "primary": 7 } });

    assert!(ThemeColorPalette::default_light().overlaid_with(&partial).is_err());
}
