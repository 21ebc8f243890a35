//! Merged configuration representing resolved settings.
//!
//! `MergedConfiguration` is the result of merging user overrides over the
//! system defaults. It carries metadata (schema version, last-modified time
//! and provenance) and a source trace recording which leaves the user
//! overrode.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ConfigurationSource, MergedConfiguration, SystemDefaults};
//!
//! let defaults = SystemDefaults::new();
//! let mut merged = MergedConfiguration::from_defaults(&defaults);
//! assert_eq!(merged.metadata.source, ConfigurationSource::System);
//!
//! merged.record_user_override("security.autoLockTimeout");
//! assert!(merged.is_user_override("security.autoLockTimeout"));
//! ```

use crate::{app_config::AppConfig, system_defaults::SystemDefaults};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Merged configuration plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedConfiguration {
    /// The resolved configuration readers see.
    pub config: AppConfig,

    /// Version, timestamp and provenance of this snapshot.
    pub metadata: ConfigMetadata,

    /// Dotted paths of leaves supplied by user overrides.
    ///
    /// Everything not listed here came from the system defaults.
    pub source_trace: ConfigurationSourceTrace,
}

impl MergedConfiguration {
    /// A snapshot equal to the system defaults, tagged `System`.
    pub fn from_defaults(defaults: &SystemDefaults) -> Self {
        Self {
            config: defaults.config().clone(),
            metadata: ConfigMetadata::new(defaults.version(), ConfigurationSource::System),
            source_trace: ConfigurationSourceTrace::new(),
        }
    }

    /// Records that `field_path` was supplied by a user override.
    pub fn record_user_override(&mut self, field_path: &str) {
        self.source_trace.add_user_override(field_path);
    }

    /// Whether `field_path` was supplied by a user override.
    pub fn is_user_override(&self, field_path: &str) -> bool {
        self.source_trace.contains(field_path)
    }
}

/// Version, timestamp and provenance of a configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMetadata {
    pub version: String,
    pub last_modified: DateTime<Utc>,
    pub source: ConfigurationSource,
}

impl ConfigMetadata {
    pub fn new(version: impl Into<String>, source: ConfigurationSource) -> Self {
        Self {
            version: version.into(),
            last_modified: Utc::now(),
            source,
        }
    }
}

/// Provenance of a configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigurationSource {
    /// Pure system defaults.
    System,

    /// User overrides only.
    User,

    /// System defaults with user overrides applied.
    Merged,
}

impl std::fmt::Display for ConfigurationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationSource::System => write!(f, "system"),
            ConfigurationSource::User => write!(f, "user"),
            ConfigurationSource::Merged => write!(f, "merged"),
        }
    }
}

/// Tracks which leaves of a merged configuration came from user overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ConfigurationSourceTrace {
    user_overrides: BTreeSet<String>,
}

impl ConfigurationSourceTrace {
    pub fn new() -> Self {
        Self {
            user_overrides: BTreeSet::new(),
        }
    }

    pub fn add_user_override(&mut self, field_path: &str) {
        self.user_overrides.insert(field_path.to_string());
    }

    pub fn contains(&self, field_path: &str) -> bool {
        self.user_overrides.contains(field_path)
    }

    /// Overridden paths in sorted order.
    pub fn overridden_fields(&self) -> Vec<&str> {
        self.user_overrides.iter().map(|s| s.as_str()).collect()
    }

    pub fn field_count(&self) -> usize {
        self.user_overrides.len()
    }
}

/// Backup document produced by export and accepted by import.
///
/// # JSON Format
///
/// ```json
/// {
///   "data": { "networking": { ... }, "security": { ... } },
///   "metadata": { "version": "1.0.0", "lastModified": "...", "source": "merged" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigExport<T = AppConfig> {
    pub data: T,
    pub metadata: ConfigMetadata,
}

#[cfg(test)]
#[path = "merged_config_tests.rs"]
mod tests;
