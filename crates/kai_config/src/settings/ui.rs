//! User interface preferences.

use serde::{Deserialize, Serialize};

/// Colour mode preference for the extension UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host's `prefers-color-scheme`.
    System,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::System => write!(f, "system"),
        }
    }
}

/// UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Colour mode applied on first launch
    pub default_theme: ThemeMode,

    /// Group the service list under category headers
    pub show_category_headers: bool,
}

/// Sparse user overrides for [`UiSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<ThemeMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_category_headers: Option<bool>,
}

impl From<&UiSettings> for UiOverrides {
    fn from(settings: &UiSettings) -> Self {
        Self {
            default_theme: Some(settings.default_theme),
            show_category_headers: Some(settings.show_category_headers),
        }
    }
}
