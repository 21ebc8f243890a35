//! Configuration merging engine.
//!
//! Merges sparse user overrides over the complete system defaults. The merge
//! is structural: it walks the schema section by section and leaf by leaf,
//! so adding a field to a section without handling it here is a compile
//! error in the `From` conversions and an obvious gap in review.
//!
//! # Merge Semantics
//!
//! - A leaf present in the overrides replaces the default leaf.
//! - A leaf absent from the overrides keeps the default.
//! - Nested records (feature flags) merge key by key, never wholesale.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ConfigurationMerger, SystemDefaults, UserConfig, settings::SecurityOverrides};
//!
//! let merger = ConfigurationMerger::new();
//! let defaults = SystemDefaults::new();
//! let overrides = UserConfig {
//!     security: Some(SecurityOverrides {
//!         auto_lock_timeout: Some(30),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let merged = merger.merge(&defaults, &overrides);
//! assert_eq!(merged.config.security.auto_lock_timeout, 30);
//! assert_eq!(merged.config.security.default_password_length, 16);
//! ```

use crate::{
    app_config::UserConfig,
    merged_config::{ConfigMetadata, ConfigurationSource, MergedConfiguration},
    settings::*,
    system_defaults::SystemDefaults,
};

/// Configuration merging engine.
///
/// Stateless: takes defaults and overrides, produces a merged snapshot.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationMerger {}

impl ConfigurationMerger {
    pub fn new() -> Self {
        Self {}
    }

    /// Merges `overrides` over `defaults`.
    ///
    /// The returned snapshot is tagged `Merged` with the defaults' version
    /// and records every overridden leaf in its source trace.
    pub fn merge(&self, defaults: &SystemDefaults, overrides: &UserConfig) -> MergedConfiguration {
        let mut merged = MergedConfiguration::from_defaults(defaults);
        merged.metadata = ConfigMetadata::new(defaults.version(), ConfigurationSource::Merged);

        let mut overridden: Vec<String> = Vec::new();
        let config = &mut merged.config;

        if let Some(networking) = &overrides.networking {
            self.merge_networking(&mut config.networking, networking, &mut overridden);
        }
        if let Some(services) = &overrides.services {
            self.merge_services(&mut config.services, services, &mut overridden);
        }
        if let Some(ui) = &overrides.ui {
            self.merge_ui(&mut config.ui, ui, &mut overridden);
        }
        if let Some(developer) = &overrides.developer {
            self.merge_developer(&mut config.developer, developer, &mut overridden);
        }
        if let Some(logging) = &overrides.logging {
            self.merge_logging(&mut config.logging, logging, &mut overridden);
        }
        if let Some(security) = &overrides.security {
            self.merge_security(&mut config.security, security, &mut overridden);
        }
        if let Some(theme) = &overrides.theme {
            self.merge_theme(&mut config.theme, theme, &mut overridden);
        }

        for field_path in overridden {
            merged.record_user_override(&field_path);
        }

        merged
    }

    /// Merges `updates` into a copy of `base`, both sparse.
    ///
    /// Leaves present in `updates` win; everything else in `base` is kept.
    /// Used to fold a batch update into the stored user overrides.
    pub fn merge_overrides(&self, base: &UserConfig, updates: &UserConfig) -> UserConfig {
        let mut result = base.clone();

        if let Some(update) = &updates.networking {
            let target = result.networking.get_or_insert_with(Default::default);
            overlay(&mut target.local_ip, &update.local_ip);
            overlay(&mut target.remote_ip, &update.remote_ip);
            overlay(&mut target.default_timeout_ms, &update.default_timeout_ms);
        }
        if let Some(update) = &updates.services {
            let target = result.services.get_or_insert_with(Default::default);
            overlay(&mut target.default_ollama_model, &update.default_ollama_model);
            overlay(&mut target.default_open_ai_model, &update.default_open_ai_model);
            overlay(
                &mut target.default_open_web_ui_model,
                &update.default_open_web_ui_model,
            );
            overlay(&mut target.default_comfy_ui_model, &update.default_comfy_ui_model);
            overlay(&mut target.default_a1111_model, &update.default_a1111_model);
            overlay(&mut target.default_a1111_refiner, &update.default_a1111_refiner);
            overlay(
                &mut target.default_anthropic_model,
                &update.default_anthropic_model,
            );
            overlay(
                &mut target.default_hugging_face_model,
                &update.default_hugging_face_model,
            );
            overlay(
                &mut target.default_hugging_face_image_model,
                &update.default_hugging_face_image_model,
            );
        }
        if let Some(update) = &updates.ui {
            let target = result.ui.get_or_insert_with(Default::default);
            overlay(&mut target.default_theme, &update.default_theme);
            overlay(&mut target.show_category_headers, &update.show_category_headers);
        }
        if let Some(update) = &updates.developer {
            let target = result.developer.get_or_insert_with(Default::default);
            overlay(&mut target.log_level, &update.log_level);
            overlay(&mut target.load_default_services, &update.load_default_services);
            if let Some(flags) = &update.feature_flags {
                let target_flags = target.feature_flags.get_or_insert_with(Default::default);
                overlay(
                    &mut target_flags.enable_graph_execution_ui,
                    &flags.enable_graph_execution_ui,
                );
            }
        }
        if let Some(update) = &updates.logging {
            let target = result.logging.get_or_insert_with(Default::default);
            overlay(&mut target.enabled, &update.enabled);
            overlay(&mut target.level, &update.level);
        }
        if let Some(update) = &updates.security {
            let target = result.security.get_or_insert_with(Default::default);
            overlay(&mut target.auto_lock_timeout, &update.auto_lock_timeout);
            overlay(
                &mut target.default_password_length,
                &update.default_password_length,
            );
            overlay(&mut target.encryption_algorithm, &update.encryption_algorithm);
            overlay(&mut target.hash_iterations, &update.hash_iterations);
        }
        if let Some(update) = &updates.theme {
            let target = result.theme.get_or_insert_with(Default::default);
            overlay(&mut target.custom_themes_enabled, &update.custom_themes_enabled);
            overlay(
                &mut target.theme_transition_duration,
                &update.theme_transition_duration,
            );
            overlay(&mut target.default_color_scheme, &update.default_color_scheme);
        }

        result
    }

    fn merge_networking(
        &self,
        target: &mut NetworkingSettings,
        overrides: &NetworkingOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(&mut target.local_ip, &overrides.local_ip, "networking.localIp", overridden);
        apply(&mut target.remote_ip, &overrides.remote_ip, "networking.remoteIp", overridden);
        apply(
            &mut target.default_timeout_ms,
            &overrides.default_timeout_ms,
            "networking.defaultTimeoutMs",
            overridden,
        );
    }

    fn merge_services(
        &self,
        target: &mut ServiceDefaultsSettings,
        overrides: &ServiceDefaultsOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(
            &mut target.default_ollama_model,
            &overrides.default_ollama_model,
            "services.defaultOllamaModel",
            overridden,
        );
        apply(
            &mut target.default_open_ai_model,
            &overrides.default_open_ai_model,
            "services.defaultOpenAiModel",
            overridden,
        );
        apply(
            &mut target.default_open_web_ui_model,
            &overrides.default_open_web_ui_model,
            "services.defaultOpenWebUIModel",
            overridden,
        );
        apply(
            &mut target.default_comfy_ui_model,
            &overrides.default_comfy_ui_model,
            "services.defaultComfyUIModel",
            overridden,
        );
        apply(
            &mut target.default_a1111_model,
            &overrides.default_a1111_model,
            "services.defaultA1111Model",
            overridden,
        );
        apply(
            &mut target.default_a1111_refiner,
            &overrides.default_a1111_refiner,
            "services.defaultA1111Refiner",
            overridden,
        );
        apply(
            &mut target.default_anthropic_model,
            &overrides.default_anthropic_model,
            "services.defaultAnthropicModel",
            overridden,
        );
        apply(
            &mut target.default_hugging_face_model,
            &overrides.default_hugging_face_model,
            "services.defaultHuggingFaceModel",
            overridden,
        );
        apply(
            &mut target.default_hugging_face_image_model,
            &overrides.default_hugging_face_image_model,
            "services.defaultHuggingFaceImageModel",
            overridden,
        );
    }

    fn merge_ui(&self, target: &mut UiSettings, overrides: &UiOverrides, overridden: &mut Vec<String>) {
        apply(
            &mut target.default_theme,
            &overrides.default_theme,
            "ui.defaultTheme",
            overridden,
        );
        apply(
            &mut target.show_category_headers,
            &overrides.show_category_headers,
            "ui.showCategoryHeaders",
            overridden,
        );
    }

    fn merge_developer(
        &self,
        target: &mut DeveloperSettings,
        overrides: &DeveloperOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(
            &mut target.log_level,
            &overrides.log_level,
            "developer.logLevel",
            overridden,
        );
        apply(
            &mut target.load_default_services,
            &overrides.load_default_services,
            "developer.loadDefaultServices",
            overridden,
        );

        // Flags merge one by one
        if let Some(flags) = &overrides.feature_flags {
            apply(
                &mut target.feature_flags.enable_graph_execution_ui,
                &flags.enable_graph_execution_ui,
                "developer.featureFlags.enableGraphExecutionUi",
                overridden,
            );
        }
    }

    fn merge_logging(
        &self,
        target: &mut LoggingSettings,
        overrides: &LoggingOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(&mut target.enabled, &overrides.enabled, "logging.enabled", overridden);
        apply(&mut target.level, &overrides.level, "logging.level", overridden);
    }

    fn merge_security(
        &self,
        target: &mut SecuritySettings,
        overrides: &SecurityOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(
            &mut target.auto_lock_timeout,
            &overrides.auto_lock_timeout,
            "security.autoLockTimeout",
            overridden,
        );
        apply(
            &mut target.default_password_length,
            &overrides.default_password_length,
            "security.defaultPasswordLength",
            overridden,
        );
        apply(
            &mut target.encryption_algorithm,
            &overrides.encryption_algorithm,
            "security.encryptionAlgorithm",
            overridden,
        );
        apply(
            &mut target.hash_iterations,
            &overrides.hash_iterations,
            "security.hashIterations",
            overridden,
        );
    }

    fn merge_theme(
        &self,
        target: &mut ThemeSettings,
        overrides: &ThemeOverrides,
        overridden: &mut Vec<String>,
    ) {
        apply(
            &mut target.custom_themes_enabled,
            &overrides.custom_themes_enabled,
            "theme.customThemesEnabled",
            overridden,
        );
        apply(
            &mut target.theme_transition_duration,
            &overrides.theme_transition_duration,
            "theme.themeTransitionDuration",
            overridden,
        );
        apply(
            &mut target.default_color_scheme,
            &overrides.default_color_scheme,
            "theme.defaultColorScheme",
            overridden,
        );
    }
}

/// Replaces a complete leaf with the override when one is present.
fn apply<T: Clone>(target: &mut T, value: &Option<T>, field_path: &str, overridden: &mut Vec<String>) {
    if let Some(value) = value {
        *target = value.clone();
        overridden.push(field_path.to_string());
    }
}

/// Replaces a sparse leaf with the update when one is present.
fn overlay<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        *target = value.clone();
    }
}

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;
