use super::*;
use crate::system_defaults::SystemDefaults;
use crate::themes::palette::is_valid_color;

#[test]
fn test_find_preset_by_name_and_slug() {
    assert_eq!(find_preset("Neon Brights").map(|p| p.id), Some("neon-brights"));
    assert_eq!(find_preset("earth-tones").map(|p| p.name), Some("Earth Tones"));
    assert!(find_preset("Missing Preset").is_none());
}

#[test]
fn test_default_color_scheme_names_a_preset() {
    let defaults = SystemDefaults::new();
    assert!(find_preset(&defaults.config().theme.default_color_scheme).is_some());
}

#[test]
fn test_preset_palette_fills_unspecified_colors_from_default() {
    let preset = find_preset("Dark Mode Elite").unwrap();
    let palette = preset.palette();
    let base = ThemeColorPalette::default_dark();

    assert_eq!(palette.background.primary, "#0f172a");
    assert_eq!(palette.text.disabled, base.text.disabled);
    assert_eq!(palette.border, base.border);
    assert_eq!(palette.shadow, base.shadow);
}

#[test]
fn test_light_preset_uses_light_base() {
    let palette = find_preset("Earth Tones").unwrap().palette();

    assert_eq!(palette.border, ThemeColorPalette::default_light().border);
    assert!(!palette.is_dark());
}

#[test]
fn test_preset_darkness_matches_background() {
    for preset in THEME_PRESETS {
        assert_eq!(
            preset.palette().is_dark(),
            preset.is_dark,
            "preset '{}'",
            preset.name
        );
    }
}

#[test]
fn test_preset_colors_are_valid() {
    for preset in THEME_PRESETS {
        let palette = preset.palette();
        for color in [
            &palette.background.primary,
            &palette.background.secondary,
            &palette.text.primary,
            &palette.text.secondary,
            &palette.interactive.primary,
        ] {
            assert!(is_valid_color(color), "preset '{}': {}", preset.name, color);
        }
    }
}
