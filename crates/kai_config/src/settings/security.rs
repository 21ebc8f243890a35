//! Security settings.
//!
//! Numeric fields are signed on purpose: a raw `set` may store a negative
//! value, and validation is what reports it.

use serde::{Deserialize, Serialize};

/// Security settings shared by the vault and key generation tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    /// Minutes of inactivity before the vault locks; 0 disables auto-lock
    pub auto_lock_timeout: i64,

    /// Length of generated passwords
    pub default_password_length: i64,

    /// Symmetric cipher name as understood by the host crypto API
    pub encryption_algorithm: String,

    /// Key-derivation iteration count
    pub hash_iterations: i64,
}

/// Sparse user overrides for [`SecuritySettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SecurityOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_lock_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_password_length: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_iterations: Option<i64>,
}

impl From<&SecuritySettings> for SecurityOverrides {
    fn from(settings: &SecuritySettings) -> Self {
        Self {
            auto_lock_timeout: Some(settings.auto_lock_timeout),
            default_password_length: Some(settings.default_password_length),
            encryption_algorithm: Some(settings.encryption_algorithm.clone()),
            hash_iterations: Some(settings.hash_iterations),
        }
    }
}
