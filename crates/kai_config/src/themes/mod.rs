//! Themes: colour palettes, presets, validation and the theme manager.

pub mod manager;
pub mod palette;
pub mod presets;
pub mod theme;
pub mod validation;

pub use manager::{ThemeManager, ACTIVE_THEME_KEY, CUSTOM_THEMES_KEY};
pub use palette::{
    hex_to_rgb, is_dark_color, is_valid_color, BackgroundColors, BorderColors, InteractiveColors, ShadowStyles,
    StatusColors, TextColors, ThemeColorPalette,
};
pub use presets::{find_preset, ThemePreset, THEME_PRESETS};
pub use theme::{
    CustomTheme, ThemeDraft, ThemeExport, ThemeExportMetadata, ThemeImportReport, ThemeOptions,
    ThemePreference, DARK_THEME_ID, LIGHT_THEME_ID, SYSTEM_THEME_ID, THEME_VERSION,
};
pub use validation::{validate_theme, MAX_THEME_NAME_LENGTH, REQUIRED_COLORS};
