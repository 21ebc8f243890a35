//! Built-in system default configuration.
//!
//! These values are the baseline for every installation. They are never
//! mutated at runtime; user changes live in [`crate::UserConfig`] and are
//! merged over them.

use crate::{app_config::AppConfig, settings::*};

/// Schema version stamped on the system defaults and every merged snapshot.
pub const SYSTEM_CONFIG_VERSION: &str = "1.0.0";

/// Immutable system defaults, tagged with the schema version.
///
/// # Examples
///
/// ```rust
/// use kai_config::SystemDefaults;
///
/// let defaults = SystemDefaults::new();
/// assert_eq!(defaults.config().security.auto_lock_timeout, 15);
/// assert_eq!(defaults.version(), "1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemDefaults {
    config: AppConfig,
    version: String,
}

impl SystemDefaults {
    /// Creates the standard system defaults.
    pub fn new() -> Self {
        Self {
            config: default_app_config(),
            version: SYSTEM_CONFIG_VERSION.to_string(),
        }
    }

    /// Wraps a custom baseline, e.g. for embedding or tests.
    pub fn with_config(config: AppConfig, version: impl Into<String>) -> Self {
        Self {
            config,
            version: version.into(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for SystemDefaults {
    fn default() -> Self {
        Self::new()
    }
}

fn default_app_config() -> AppConfig {
    AppConfig {
        networking: NetworkingSettings {
            local_ip: "localhost".to_string(),
            // Must be configured by the user
            remote_ip: String::new(),
            default_timeout_ms: 15_000,
        },
        services: ServiceDefaultsSettings {
            default_ollama_model: "gemma3:1b".to_string(),
            default_open_ai_model: "gpt-4o".to_string(),
            default_open_web_ui_model: "gemma:latest".to_string(),
            default_comfy_ui_model: "v1-5-pruned-emaonly.safetensors".to_string(),
            default_a1111_model: String::new(),
            default_a1111_refiner: String::new(),
            default_anthropic_model: "claude-3-haiku-20240307".to_string(),
            default_hugging_face_model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            default_hugging_face_image_model: "stabilityai/stable-diffusion-2-1".to_string(),
        },
        ui: UiSettings {
            default_theme: ThemeMode::Dark,
            show_category_headers: true,
        },
        developer: DeveloperSettings {
            log_level: LogLevel::Info,
            load_default_services: true,
            feature_flags: FeatureFlags {
                enable_graph_execution_ui: false,
            },
        },
        logging: LoggingSettings {
            enabled: true,
            level: LogLevel::Info,
        },
        security: SecuritySettings {
            auto_lock_timeout: 15,
            default_password_length: 16,
            encryption_algorithm: "AES-GCM".to_string(),
            hash_iterations: 100_000,
        },
        theme: ThemeSettings {
            custom_themes_enabled: true,
            theme_transition_duration: 200,
            default_color_scheme: "dark-mode-elite".to_string(),
        },
    }
}

#[cfg(test)]
#[path = "system_defaults_tests.rs"]
mod tests;
