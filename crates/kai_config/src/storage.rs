//! Key/value persistence for configuration.
//!
//! The store depends only on the `ConfigStorage` contract: an async
//! `get`/`set` of JSON values under string keys, no transactions, no schema.
//! Three implementations are provided:
//!
//! - [`MemoryStorage`] keeps values in a map (tests, embedding).
//! - [`FileStorage`] writes one JSON file per key into a directory.
//! - [`FallbackStorage`] tries a primary backend and falls back to a
//!   secondary one when the primary is unavailable.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ConfigStorage, MemoryStorage};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), kai_config::ConfigurationError> {
//! let storage = MemoryStorage::new();
//! storage.set("user-config", json!({ "ui": { "defaultTheme": "light" } })).await?;
//!
//! let stored = storage.get("user-config").await?;
//! assert!(stored.is_some());
//! # Ok(())
//! # }
//! ```

use crate::errors::{ConfigurationError, ConfigurationResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Abstract key/value persistence.
///
/// # Errors
///
/// Implementations return `StorageUnavailable` when the backend cannot be
/// reached and `StorageCorrupt` when a stored value cannot be decoded.
#[async_trait]
pub trait ConfigStorage: Send + Sync {
    /// Loads the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Value) -> ConfigurationResult<()>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: Value) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value);
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl ConfigStorage for MemoryStorage {
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> ConfigurationResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed storage: one pretty-printed JSON file per key.
///
/// Writes go to a uniquely named temporary file that is then renamed over
/// the target, so a crash mid-write never leaves a truncated document behind
/// and concurrent writes to one key end with the last rename winning.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File holding `key`.
    ///
    /// `[A-Za-z0-9_-]` is kept as is and every other byte is written as
    /// `%XX`, so distinct keys always map to distinct files.
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        let mut file_stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
                file_stem.push(char::from(byte));
            } else {
                file_stem.push_str(&format!("%{:02X}", byte));
            }
        }
        self.directory.join(format!("{}.json", file_stem))
    }

    /// Unique sibling of `path` for one in-flight write.
    fn temp_path_for(path: &Path) -> PathBuf {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
    }
}

#[async_trait]
impl ConfigStorage for FileStorage {
    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>> {
        let path = self.path_for_key(key);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No stored value");
                return Ok(None);
            }
            Err(e) => {
                return Err(ConfigurationError::StorageUnavailable {
                    key: key.to_string(),
                    reason: format!("failed to read {}: {}", path.display(), e),
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| ConfigurationError::StorageCorrupt {
                key: key.to_string(),
                reason: format!("{} is not valid JSON: {}", path.display(), e),
            })
    }

    #[instrument(skip(self, value), fields(directory = %self.directory.display()))]
    async fn set(&self, key: &str, value: Value) -> ConfigurationResult<()> {
        let unavailable = |reason: String| ConfigurationError::StorageUnavailable {
            key: key.to_string(),
            reason,
        };

        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| unavailable(format!("failed to create {}: {}", self.directory.display(), e)))?;

        let contents = serde_json::to_string_pretty(&value)
            .map_err(|e| unavailable(format!("failed to serialize value: {}", e)))?;

        let path = self.path_for_key(key);
        let temp_path = Self::temp_path_for(&path);

        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|e| unavailable(format!("failed to write {}: {}", temp_path.display(), e)))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(unavailable(format!("failed to replace {}: {}", path.display(), e)));
        }

        debug!(path = %path.display(), "Stored value");
        Ok(())
    }
}

/// Storage that falls back to a secondary backend.
///
/// Only `StorageUnavailable` from the primary triggers the fallback; a
/// corrupt primary value is reported as-is.
#[derive(Clone)]
pub struct FallbackStorage {
    primary: Arc<dyn ConfigStorage>,
    secondary: Arc<dyn ConfigStorage>,
}

impl FallbackStorage {
    pub fn new(primary: Arc<dyn ConfigStorage>, secondary: Arc<dyn ConfigStorage>) -> Self {
        Self { primary, secondary }
    }
}

impl std::fmt::Debug for FallbackStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackStorage").finish_non_exhaustive()
    }
}

#[async_trait]
impl ConfigStorage for FallbackStorage {
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>> {
        match self.primary.get(key).await {
            Err(ConfigurationError::StorageUnavailable { reason, .. }) => {
                warn!(key, reason = %reason, "Primary storage unavailable, reading from fallback");
                self.secondary.get(key).await
            }
            other => other,
        }
    }

    async fn set(&self, key: &str, value: Value) -> ConfigurationResult<()> {
        match self.primary.set(key, value.clone()).await {
            Err(ConfigurationError::StorageUnavailable { reason, .. }) => {
                warn!(key, reason = %reason, "Primary storage unavailable, writing to fallback");
                self.secondary.set(key, value).await
            }
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
