//! Theme manager.
//!
//! Keeps the user's custom themes and theme preference in the same
//! key/value storage as the configuration, under their own keys.

use super::palette::{is_dark_color, ThemeColorPalette};
use super::presets::find_preset;
use super::theme::{
    CustomTheme, ThemeDraft, ThemeExport, ThemeExportMetadata, ThemeImportReport, ThemeOptions,
    ThemePreference, DARK_THEME_ID, LIGHT_THEME_ID, SYSTEM_THEME_ID, THEME_VERSION,
};
use super::validation::validate_theme;
use crate::errors::{ConfigurationError, ConfigurationResult};
use crate::storage::ConfigStorage;
use crate::validator::ValidationResult;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Storage key of the custom theme list.
pub const CUSTOM_THEMES_KEY: &str = "custom-themes";

/// Storage key of the active theme preference.
pub const ACTIVE_THEME_KEY: &str = "active-theme";

/// Creation time stamped on the built-in themes (2024-01-01T00:00:00Z).
const BUILT_IN_TIMESTAMP: i64 = 1_704_067_200;

/// Source tag written into theme exports.
const EXPORT_SOURCE: &str = "kai-cd";

#[derive(Default)]
struct ThemeState {
    custom_themes: Vec<CustomTheme>,
    active_theme: ThemePreference,
    initialized: bool,
}

/// One theme of an import document, after validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportedTheme {
    name: String,
    description: Option<String>,
    author: Option<String>,
    colors: Value,
    spacing: Option<BTreeMap<String, String>>,
    border_radius: Option<BTreeMap<String, String>>,
    tags: Option<Vec<String>>,
    is_dark: Option<bool>,
    preview: Option<String>,
}

#[derive(Deserialize)]
struct ImportDocument {
    themes: Vec<Value>,
}

/// Built-in and custom themes plus the active theme preference.
///
/// # Examples
///
/// ```rust
/// use kai_config::{MemoryStorage, ThemeManager, ThemeOptions, ThemeColorPalette};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), kai_config::ConfigurationError> {
/// let themes = ThemeManager::new(Arc::new(MemoryStorage::new()));
/// themes.initialize().await;
///
/// let theme = themes.create_theme("Midnight", ThemeColorPalette::default_dark(), ThemeOptions::default());
/// themes.save_theme(theme.clone()).await?;
/// themes.set_active_theme(theme.id.as_str().into()).await?;
///
/// assert_eq!(themes.current_theme(false).name, "Midnight");
/// # Ok(())
/// # }
/// ```
pub struct ThemeManager {
    storage: Arc<dyn ConfigStorage>,
    state: Mutex<ThemeState>,
}

impl ThemeManager {
    pub fn new(storage: Arc<dyn ConfigStorage>) -> Self {
        Self {
            storage,
            state: Mutex::new(ThemeState::default()),
        }
    }

    /// Loads custom themes and the active preference.
    ///
    /// Runs once. If either key fails to load, both fall back: no custom
    /// themes and the `system` preference.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        if self.lock_state().initialized {
            return;
        }

        let loaded = self.load().await;

        let mut state = self.lock_state();
        match loaded {
            Ok((custom_themes, active_theme)) => {
                info!(
                    custom_themes = custom_themes.len(),
                    active_theme = %active_theme,
                    "Loaded themes"
                );
                state.custom_themes = custom_themes;
                state.active_theme = active_theme;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load themes, using built-in themes only");
                state.custom_themes = Vec::new();
                state.active_theme = ThemePreference::System;
            }
        }
        state.initialized = true;
    }

    async fn load(&self) -> ConfigurationResult<(Vec<CustomTheme>, ThemePreference)> {
        let custom_themes = match self.storage.get(CUSTOM_THEMES_KEY).await? {
            Some(value) => decode(CUSTOM_THEMES_KEY, value)?,
            None => Vec::new(),
        };
        let active_theme = match self.storage.get(ACTIVE_THEME_KEY).await? {
            Some(value) => decode(ACTIVE_THEME_KEY, value)?,
            None => ThemePreference::System,
        };
        Ok((custom_themes, active_theme))
    }

    /// The `light` and `dark` themes that always exist.
    pub fn built_in_themes() -> Vec<CustomTheme> {
        vec![light_theme(), dark_theme()]
    }

    pub fn is_built_in(id: &str) -> bool {
        id == LIGHT_THEME_ID || id == DARK_THEME_ID
    }

    /// Built-in themes followed by custom themes.
    pub fn all_themes(&self) -> Vec<CustomTheme> {
        let mut themes = Self::built_in_themes();
        themes.extend(self.custom_themes());
        themes
    }

    pub fn custom_themes(&self) -> Vec<CustomTheme> {
        self.lock_state().custom_themes.clone()
    }

    pub fn theme(&self, id: &str) -> Option<CustomTheme> {
        self.all_themes().into_iter().find(|theme| theme.id == id)
    }

    pub fn active_theme(&self) -> ThemePreference {
        self.lock_state().active_theme.clone()
    }

    /// The theme to display.
    ///
    /// `system` resolves through `prefers_dark`; a preference naming a theme
    /// that no longer exists resolves to the dark theme.
    pub fn current_theme(&self, prefers_dark: bool) -> CustomTheme {
        let id = match self.active_theme() {
            ThemePreference::System if prefers_dark => DARK_THEME_ID.to_string(),
            ThemePreference::System => LIGHT_THEME_ID.to_string(),
            other => other.as_str().to_string(),
        };

        self.theme(&id).unwrap_or_else(dark_theme)
    }

    /// Stores the user's theme preference.
    ///
    /// # Errors
    ///
    /// `ThemeNotFound` if a custom preference names no existing theme, or
    /// the storage error if the preference cannot be persisted.
    #[instrument(skip(self, preference), fields(preference = %preference))]
    pub async fn set_active_theme(&self, preference: ThemePreference) -> ConfigurationResult<()> {
        if let ThemePreference::Custom(id) = &preference {
            if self.theme(id).is_none() {
                return Err(ConfigurationError::ThemeNotFound { id: id.clone() });
            }
        }

        self.lock_state().active_theme = preference.clone();
        self.storage
            .set(ACTIVE_THEME_KEY, Value::String(preference.to_string()))
            .await?;
        debug!("Active theme changed");
        Ok(())
    }

    /// Builds a new custom theme. The theme is not saved.
    pub fn create_theme(
        &self,
        name: impl Into<String>,
        colors: ThemeColorPalette,
        options: ThemeOptions,
    ) -> CustomTheme {
        let now = Utc::now();
        let is_dark = options.is_dark.unwrap_or_else(|| colors.is_dark());
        CustomTheme {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: options.description,
            author: options.author,
            version: THEME_VERSION.to_string(),
            created: now,
            modified: now,
            colors,
            spacing: None,
            border_radius: None,
            tags: options.tags,
            is_built_in: false,
            is_dark,
            preview: None,
        }
    }

    /// Inserts `theme`, or replaces the custom theme with the same id.
    ///
    /// # Errors
    ///
    /// `BuiltInThemeImmutable` for the `light` and `dark` ids,
    /// `ReservedThemeId` for `system`, or the storage error if the list
    /// cannot be persisted.
    pub async fn save_theme(&self, mut theme: CustomTheme) -> ConfigurationResult<()> {
        if Self::is_built_in(&theme.id) {
            return Err(ConfigurationError::BuiltInThemeImmutable { id: theme.id });
        }
        if theme.id == SYSTEM_THEME_ID {
            return Err(ConfigurationError::ReservedThemeId { id: theme.id });
        }

        let snapshot = {
            let mut state = self.lock_state();
            match state.custom_themes.iter().position(|t| t.id == theme.id) {
                Some(index) => {
                    theme.modified = Utc::now();
                    state.custom_themes[index] = theme;
                }
                None => state.custom_themes.push(theme),
            }
            state.custom_themes.clone()
        };

        self.persist_themes(&snapshot).await
    }

    /// Deletes a custom theme. Returns `false` if no such theme exists.
    ///
    /// Deleting the active theme switches the preference to `system`.
    ///
    /// # Errors
    ///
    /// `BuiltInThemeImmutable` for the `light` and `dark` ids.
    pub async fn delete_theme(&self, id: &str) -> ConfigurationResult<bool> {
        if Self::is_built_in(id) {
            return Err(ConfigurationError::BuiltInThemeImmutable { id: id.to_string() });
        }

        let (snapshot, was_active) = {
            let mut state = self.lock_state();
            let before = state.custom_themes.len();
            state.custom_themes.retain(|theme| theme.id != id);
            if state.custom_themes.len() == before {
                return Ok(false);
            }
            (
                state.custom_themes.clone(),
                state.active_theme.as_str() == id,
            )
        };

        self.persist_themes(&snapshot).await?;
        if was_active {
            self.set_active_theme(ThemePreference::System).await?;
        }
        info!(theme_id = id, "Deleted custom theme");
        Ok(true)
    }

    /// Builds a theme from a palette preset, looked up by name or slug.
    pub fn create_from_preset(&self, preset_name: &str, custom_name: &str) -> Option<CustomTheme> {
        let preset = find_preset(preset_name)?;
        Some(self.create_theme(
            custom_name,
            preset.palette(),
            ThemeOptions {
                description: Some(format!("Based on {}", preset.description)),
                author: None,
                is_dark: Some(preset.is_dark),
                tags: Some(vec!["generated".to_string(), "template".to_string()]),
            },
        ))
    }

    pub fn validate_theme(&self, draft: &ThemeDraft) -> ValidationResult {
        validate_theme(draft)
    }

    /// Serializes custom themes as a pretty-printed export document.
    ///
    /// With `ids`, only the matching custom themes are exported.
    pub fn export_themes(&self, ids: Option<&[&str]>) -> ConfigurationResult<String> {
        let themes: Vec<CustomTheme> = self
            .custom_themes()
            .into_iter()
            .filter(|theme| ids.is_none_or(|ids| ids.contains(&theme.id.as_str())))
            .collect();

        let export = ThemeExport {
            version: THEME_VERSION.to_string(),
            export_date: Utc::now(),
            metadata: Some(ThemeExportMetadata {
                source: EXPORT_SOURCE.to_string(),
                description: Some(format!("Exported {} custom theme(s)", themes.len())),
            }),
            themes,
        };

        serde_json::to_string_pretty(&export).map_err(|e| ConfigurationError::ParseError {
            reason: e.to_string(),
        })
    }

    /// Imports themes from an export document.
    ///
    /// Each theme is validated on its own; invalid themes are skipped and
    /// reported. Imported themes get fresh ids and timestamps.
    ///
    /// # Errors
    ///
    /// `ParseError` if the document has no `themes` array, or the storage
    /// error if the updated list cannot be persisted.
    #[instrument(skip(self, json))]
    pub async fn import_themes(&self, json: &str) -> ConfigurationResult<ThemeImportReport> {
        let document: ImportDocument =
            serde_json::from_str(json).map_err(|e| ConfigurationError::ParseError {
                reason: format!("Invalid theme export format: {}", e),
            })?;

        let mut report = ThemeImportReport::default();
        let mut imported = Vec::new();

        for value in document.themes {
            let label = value
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("unnamed")
                .to_string();

            match self.decode_import(value) {
                Ok(theme) => imported.push(theme),
                Err(message) => {
                    warn!(theme = %label, "Skipped theme during import: {}", message);
                    report.errors.push(format!("Theme \"{}\": {}", label, message));
                }
            }
        }

        if !imported.is_empty() {
            let snapshot = {
                let mut state = self.lock_state();
                state.custom_themes.extend(imported.iter().cloned());
                state.custom_themes.clone()
            };
            self.persist_themes(&snapshot).await?;
        }

        report.success = imported.len();
        info!(
            imported = report.success,
            skipped = report.errors.len(),
            "Theme import finished"
        );
        Ok(report)
    }

    fn decode_import(&self, value: Value) -> Result<CustomTheme, String> {
        let draft: ThemeDraft = serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
        let validation = validate_theme(&draft);
        if !validation.is_valid() {
            return Err(validation.error_messages().join(", "));
        }

        let entry: ImportedTheme = serde_json::from_value(value).map_err(|e| e.to_string())?;
        let is_dark = entry.is_dark.unwrap_or_else(|| {
            entry
                .colors
                .pointer("/background/primary")
                .and_then(Value::as_str)
                .is_none_or(is_dark_color)
        });
        let colors = ThemeColorPalette::default_for(is_dark)
            .overlaid_with(&entry.colors)
            .map_err(|e| e.to_string())?;

        let mut theme = self.create_theme(
            entry.name,
            colors,
            ThemeOptions {
                description: entry.description,
                author: entry.author,
                is_dark: Some(is_dark),
                tags: entry.tags,
            },
        );
        theme.spacing = entry.spacing;
        theme.border_radius = entry.border_radius;
        theme.preview = entry.preview;
        Ok(theme)
    }

    async fn persist_themes(&self, themes: &[CustomTheme]) -> ConfigurationResult<()> {
        let value = serde_json::to_value(themes).map_err(|e| ConfigurationError::ParseError {
            reason: e.to_string(),
        })?;
        self.storage.set(CUSTOM_THEMES_KEY, value).await
    }

    fn lock_state(&self) -> MutexGuard<'_, ThemeState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock_state();
        f.debug_struct("ThemeManager")
            .field("custom_themes", &state.custom_themes.len())
            .field("active_theme", &state.active_theme)
            .finish_non_exhaustive()
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, value: Value) -> ConfigurationResult<T> {
    serde_json::from_value(value).map_err(|e| ConfigurationError::StorageCorrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

fn built_in_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(BUILT_IN_TIMESTAMP, 0).unwrap_or_default()
}

fn light_theme() -> CustomTheme {
    CustomTheme {
        id: LIGHT_THEME_ID.to_string(),
        name: "Light".to_string(),
        description: Some("Clean and minimal light theme".to_string()),
        author: None,
        version: THEME_VERSION.to_string(),
        created: built_in_timestamp(),
        modified: built_in_timestamp(),
        colors: ThemeColorPalette::default_light(),
        spacing: None,
        border_radius: None,
        tags: None,
        is_built_in: true,
        is_dark: false,
        preview: None,
    }
}

fn dark_theme() -> CustomTheme {
    CustomTheme {
        id: DARK_THEME_ID.to_string(),
        name: "Dark".to_string(),
        description: Some("Modern dark theme with blue accents".to_string()),
        author: None,
        version: THEME_VERSION.to_string(),
        created: built_in_timestamp(),
        modified: built_in_timestamp(),
        colors: ThemeColorPalette::default_dark(),
        spacing: None,
        border_radius: None,
        tags: None,
        is_built_in: true,
        is_dark: true,
        preview: None,
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
