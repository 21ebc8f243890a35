//! Complete and sparse application configuration.
//!
//! `AppConfig` is the full schema: every section, every leaf. It is the shape
//! of the system defaults and of the merged configuration handed to readers.
//!
//! `UserConfig` is the same schema with every section and leaf optional. It
//! holds only what the user changed and is the only part that is persisted.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "security": { "autoLockTimeout": 30 },
//!   "developer": { "featureFlags": { "enableGraphExecutionUi": true } }
//! }
//! ```

use crate::settings::*;
use serde::{Deserialize, Serialize};

/// The complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub networking: NetworkingSettings,
    pub services: ServiceDefaultsSettings,
    pub ui: UiSettings,
    pub developer: DeveloperSettings,
    pub logging: LoggingSettings,
    pub security: SecuritySettings,
    pub theme: ThemeSettings,
}

/// Sparse user overrides over [`AppConfig`].
///
/// Unknown sections or leaves are rejected during deserialization, so a
/// stored or imported document either fits the schema or fails to load.
///
/// # Examples
///
/// ```rust
/// use kai_config::{UserConfig, settings::SecurityOverrides};
///
/// let overrides = UserConfig {
///     security: Some(SecurityOverrides {
///         auto_lock_timeout: Some(30),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(!overrides.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking: Option<NetworkingOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<ServiceDefaultsOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<DeveloperOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityOverrides>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeOverrides>,
}

impl UserConfig {
    /// Returns `true` when no section is overridden.
    pub fn is_empty(&self) -> bool {
        self.networking.is_none()
            && self.services.is_none()
            && self.ui.is_none()
            && self.developer.is_none()
            && self.logging.is_none()
            && self.security.is_none()
            && self.theme.is_none()
    }
}

/// Every leaf of the complete configuration, as overrides.
///
/// Lets one validator serve both the merged configuration and sparse
/// imports.
impl From<&AppConfig> for UserConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            networking: Some(NetworkingOverrides::from(&config.networking)),
            services: Some(ServiceDefaultsOverrides::from(&config.services)),
            ui: Some(UiOverrides::from(&config.ui)),
            developer: Some(DeveloperOverrides::from(&config.developer)),
            logging: Some(LoggingOverrides::from(&config.logging)),
            security: Some(SecurityOverrides::from(&config.security)),
            theme: Some(ThemeOverrides::from(&config.theme)),
        }
    }
}

#[cfg(test)]
#[path = "app_config_tests.rs"]
mod tests;
