//! Theme system settings.

use serde::{Deserialize, Serialize};

/// Settings for the theme system.
///
/// `default_color_scheme` names a palette preset by its slug
/// (see [`crate::themes::presets`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    pub custom_themes_enabled: bool,

    /// Transition time in milliseconds when switching themes
    pub theme_transition_duration: i64,

    pub default_color_scheme: String,
}

/// Sparse user overrides for [`ThemeSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_themes_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_transition_duration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color_scheme: Option<String>,
}

impl From<&ThemeSettings> for ThemeOverrides {
    fn from(settings: &ThemeSettings) -> Self {
        Self {
            custom_themes_enabled: Some(settings.custom_themes_enabled),
            theme_transition_duration: Some(settings.theme_transition_duration),
            default_color_scheme: Some(settings.default_color_scheme.clone()),
        }
    }
}
