//! Developer and debugging settings.

use super::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Experimental feature toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub enable_graph_execution_ui: bool,
}

/// Sparse user overrides for [`FeatureFlags`].
///
/// Merged flag by flag, so overriding one flag leaves the others at their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureFlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_graph_execution_ui: Option<bool>,
}

/// Developer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSettings {
    /// Verbosity for developer diagnostics
    pub log_level: LogLevel,

    /// Register the bundled default services on first run
    pub load_default_services: bool,

    pub feature_flags: FeatureFlags,
}

/// Sparse user overrides for [`DeveloperSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeveloperOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_default_services: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_flags: Option<FeatureFlagOverrides>,
}

impl From<&FeatureFlags> for FeatureFlagOverrides {
    fn from(flags: &FeatureFlags) -> Self {
        Self {
            enable_graph_execution_ui: Some(flags.enable_graph_execution_ui),
        }
    }
}

impl From<&DeveloperSettings> for DeveloperOverrides {
    fn from(settings: &DeveloperSettings) -> Self {
        Self {
            log_level: Some(settings.log_level),
            load_default_services: Some(settings.load_default_services),
            feature_flags: Some(FeatureFlagOverrides::from(&settings.feature_flags)),
        }
    }
}
