//! Theme records and the theme export format.

use super::palette::ThemeColorPalette;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Format version written into themes and theme exports.
pub const THEME_VERSION: &str = "1.0";

/// Id of the built-in light theme.
pub const LIGHT_THEME_ID: &str = "light";

/// Id of the built-in dark theme.
pub const DARK_THEME_ID: &str = "dark";

/// Preference value that follows the system colour scheme.
pub const SYSTEM_THEME_ID: &str = "system";

/// A built-in or user-defined theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    pub version: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub colors: ThemeColorPalette,

    /// CSS lengths keyed by size name (`xs`, `sm`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub is_built_in: bool,

    pub is_dark: bool,

    /// Preview image as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

/// Optional attributes for [`super::ThemeManager::create_theme`].
#[derive(Debug, Clone, Default)]
pub struct ThemeOptions {
    pub description: Option<String>,
    pub author: Option<String>,

    /// Overrides brightness detection when set.
    pub is_dark: Option<bool>,

    pub tags: Option<Vec<String>>,
}

/// Which theme the user wants.
///
/// Serialized as a plain string: `"light"`, `"dark"`, `"system"` or the id
/// of a custom theme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemePreference {
    Light,
    Dark,

    /// Follow the host's colour scheme preference.
    #[default]
    System,

    Custom(String),
}

impl ThemePreference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Light => LIGHT_THEME_ID,
            Self::Dark => DARK_THEME_ID,
            Self::System => SYSTEM_THEME_ID,
            Self::Custom(id) => id,
        }
    }
}

impl From<String> for ThemePreference {
    fn from(value: String) -> Self {
        match value.as_str() {
            LIGHT_THEME_ID => Self::Light,
            DARK_THEME_ID => Self::Dark,
            SYSTEM_THEME_ID => Self::System,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for ThemePreference {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ThemePreference> for String {
    fn from(value: ThemePreference) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Loosely-typed theme under validation.
///
/// Imports are validated before they are decoded into [`CustomTheme`], so
/// the colours stay raw JSON here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDraft {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub colors: Option<Value>,
}

impl From<&CustomTheme> for ThemeDraft {
    fn from(theme: &CustomTheme) -> Self {
        Self {
            name: Some(theme.name.clone()),
            description: theme.description.clone(),
            colors: serde_json::to_value(&theme.colors).ok(),
        }
    }
}

/// Theme export document.
///
/// ```json
/// {
///   "version": "1.0",
///   "exportDate": "2025-06-17T21:35:16Z",
///   "themes": [ ... ],
///   "metadata": { "source": "kai-cd", "description": "Exported 2 custom theme(s)" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExport {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub themes: Vec<CustomTheme>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ThemeExportMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExportMetadata {
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Outcome of a theme import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeImportReport {
    /// Number of themes imported.
    pub success: usize,

    /// One message per skipped theme.
    pub errors: Vec<String>,
}
