//! Network endpoint settings.

use serde::{Deserialize, Serialize};

/// Addresses and timeouts used when talking to registered AI services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkingSettings {
    /// Host used for services running on this machine
    pub local_ip: String,

    /// Host used for services on another machine; empty until configured
    pub remote_ip: String,

    /// Default request timeout in milliseconds
    pub default_timeout_ms: i64,
}

/// Sparse user overrides for [`NetworkingSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_timeout_ms: Option<i64>,
}

impl From<&NetworkingSettings> for NetworkingOverrides {
    fn from(settings: &NetworkingSettings) -> Self {
        Self {
            local_ip: Some(settings.local_ip.clone()),
            remote_ip: Some(settings.remote_ip.clone()),
            default_timeout_ms: Some(settings.default_timeout_ms),
        }
    }
}
