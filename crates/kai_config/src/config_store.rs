//! The configuration store.
//!
//! `ConfigStore` is the single authority over application configuration. It
//! owns the sparse user overrides, keeps the merged configuration in step
//! with them, persists the overrides through an injected [`ConfigStorage`]
//! and tells subscribers about every successful mutation.
//!
//! # Lifecycle
//!
//! A new store starts `Uninitialized` and serves the system defaults.
//! `initialize` loads the persisted overrides once and moves the store to
//! `Ready`. Loading never fails: an unreachable backend, a corrupt document
//! or a missing key all leave the store on system defaults with a warning.
//!
//! # Mutations
//!
//! `set`, `update`, `reset` and `import` follow the same sequence:
//!
//! 1. Compute the new overrides and the new merged configuration.
//! 2. Swap them into memory.
//! 3. Persist the overrides under [`USER_CONFIG_KEY`].
//! 4. Notify subscribers with one [`ConfigChangeEvent`].
//!
//! If step 3 fails the in-memory state keeps the mutation, no event is
//! emitted and the storage error is returned.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ConfigStore, MemoryStorage};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), kai_config::ConfigurationError> {
//! let store = ConfigStore::new(Arc::new(MemoryStorage::new()));
//! store.initialize().await;
//!
//! store.set("security.autoLockTimeout", json!(30)).await?;
//! assert_eq!(store.get("security.autoLockTimeout"), Some(json!(30)));
//! # Ok(())
//! # }
//! ```

use crate::{
    app_config::{AppConfig, UserConfig},
    basic_validator::BasicConfigurationValidator,
    errors::{ConfigurationError, ConfigurationResult},
    events::{ChangeKey, ChangeSource, ConfigChangeEvent, ListenerRegistry, Subscription},
    merged_config::{ConfigExport, ConfigMetadata, MergedConfiguration},
    merger::ConfigurationMerger,
    path::ConfigPath,
    storage::ConfigStorage,
    system_defaults::SystemDefaults,
    validator::{ConfigurationValidator, ValidationResult},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, instrument, warn};

/// Storage key holding the persisted user overrides.
pub const USER_CONFIG_KEY: &str = "user-config";

/// Lifecycle state of a [`ConfigStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Uninitialized,
    Initializing,
    Ready,
}

struct StoreState {
    user_config: UserConfig,
    merged: MergedConfiguration,
    status: StoreStatus,
}

/// Document accepted by [`ConfigStore::import_json`].
///
/// `data` may be a complete exported configuration or any sparse subset.
#[derive(Deserialize)]
struct ImportDocument {
    data: UserConfig,

    #[serde(default)]
    metadata: Option<ConfigMetadata>,
}

/// Single authority for reading, mutating, validating, persisting and
/// broadcasting application configuration.
///
/// The store is `Send + Sync`; wrap it in an `Arc` to share it. Every
/// configuration it hands out is an owned copy.
pub struct ConfigStore {
    storage: Arc<dyn ConfigStorage>,
    defaults: SystemDefaults,
    merger: ConfigurationMerger,
    validator: Arc<dyn ConfigurationValidator>,
    state: Mutex<StoreState>,
    listeners: ListenerRegistry,
}

impl ConfigStore {
    /// Creates a store over `storage` using the built-in system defaults and
    /// the basic validation rules.
    pub fn new(storage: Arc<dyn ConfigStorage>) -> Self {
        Self::with_defaults(storage, SystemDefaults::new())
    }

    /// Creates a store over `storage` with custom system defaults.
    pub fn with_defaults(storage: Arc<dyn ConfigStorage>, defaults: SystemDefaults) -> Self {
        let merged = MergedConfiguration::from_defaults(&defaults);
        Self {
            storage,
            defaults,
            merger: ConfigurationMerger::new(),
            validator: Arc::new(BasicConfigurationValidator::new()),
            state: Mutex::new(StoreState {
                user_config: UserConfig::default(),
                merged,
                status: StoreStatus::Uninitialized,
            }),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Replaces the validator used by `validate` and `import`.
    pub fn with_validator(mut self, validator: Arc<dyn ConfigurationValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn status(&self) -> StoreStatus {
        self.lock_state().status
    }

    pub fn defaults(&self) -> &SystemDefaults {
        &self.defaults
    }

    /// Loads persisted user overrides.
    ///
    /// Only the first call does any work; later calls return immediately.
    /// Failures are logged and leave the store on system defaults.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        {
            let mut state = self.lock_state();
            if state.status != StoreStatus::Uninitialized {
                debug!(status = ?state.status, "Configuration store already initialized");
                return;
            }
            state.status = StoreStatus::Initializing;
        }

        let loaded = self.load_user_config().await;

        let mut state = self.lock_state();
        if let Some(user_config) = loaded {
            let merged = self.merger.merge(&self.defaults, &user_config);
            info!(
                overridden_fields = merged.source_trace.field_count(),
                "Loaded user configuration"
            );
            state.user_config = user_config;
            state.merged = merged;
        }
        state.status = StoreStatus::Ready;
    }

    async fn load_user_config(&self) -> Option<UserConfig> {
        let stored = match self.storage.get(USER_CONFIG_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key = USER_CONFIG_KEY, "No stored user configuration, using defaults");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to load user configuration, using defaults");
                return None;
            }
        };

        match serde_json::from_value::<UserConfig>(stored) {
            Ok(user_config) => Some(user_config),
            Err(e) => {
                warn!(
                    key = USER_CONFIG_KEY,
                    error = %e,
                    "Stored user configuration is corrupt, using defaults"
                );
                None
            }
        }
    }

    /// The merged configuration.
    pub fn config(&self) -> AppConfig {
        self.lock_state().merged.config.clone()
    }

    /// The merged configuration together with its metadata and source trace.
    pub fn merged_configuration(&self) -> MergedConfiguration {
        self.lock_state().merged.clone()
    }

    /// The sparse overrides the user has made.
    pub fn user_overrides(&self) -> UserConfig {
        self.lock_state().user_config.clone()
    }

    /// Value at a dotted path of the merged configuration.
    ///
    /// Returns `None` for malformed paths and for paths that do not exist.
    pub fn get(&self, path: &str) -> Option<Value> {
        let path = ConfigPath::parse(path).ok()?;
        let config = serde_json::to_value(self.config()).ok()?;
        path.lookup(&config).cloned()
    }

    /// Value at a dotted path, decoded as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        serde_json::from_value(self.get(path)?).ok()
    }

    /// Writes `value` into the user overrides at `path`.
    ///
    /// The path must name a section or leaf of the configuration schema and
    /// the value must have the JSON shape of that section or leaf. A `null`
    /// value removes the override so the default applies again.
    ///
    /// The value is **not** checked against the validation rules: a negative
    /// auto-lock timeout, for example, is stored as given. Use
    /// [`ConfigStore::import`] or [`ConfigStore::validate_current`] where
    /// validation is wanted.
    ///
    /// # Errors
    ///
    /// - `InvalidPath` if the path is malformed or outside the schema
    /// - `TypeMismatch` if the value does not fit the schema at that path
    /// - the storage error if persisting fails (the change stays in memory)
    #[instrument(skip(self, value))]
    pub async fn set(&self, path: &str, value: Value) -> ConfigurationResult<()> {
        let config_path = ConfigPath::parse(path)?;

        let schema = to_json(self.defaults.config())?;
        if config_path.lookup(&schema).is_none() {
            return Err(ConfigurationError::InvalidPath {
                path: path.to_string(),
                reason: "not part of the configuration schema".to_string(),
            });
        }

        let (snapshot, event) = {
            let mut state = self.lock_state();

            let before = to_json(&state.merged.config)?;
            let old_value = config_path.lookup(&before).cloned().unwrap_or(Value::Null);

            let mut overrides = to_json(&state.user_config)?;
            config_path.assign(&mut overrides, value);
            let user_config: UserConfig = serde_json::from_value(overrides).map_err(|e| {
                ConfigurationError::TypeMismatch {
                    path: path.to_string(),
                    reason: e.to_string(),
                }
            })?;

            self.apply_user_config(&mut state, user_config);

            let after = to_json(&state.merged.config)?;
            let new_value = config_path.lookup(&after).cloned().unwrap_or(Value::Null);

            (
                state.user_config.clone(),
                ConfigChangeEvent::new(
                    ChangeKey::Path(path.to_string()),
                    old_value,
                    new_value,
                    ChangeSource::User,
                ),
            )
        };

        debug!(
            old_value = %event.old_value,
            new_value = %event.new_value,
            "Configuration value set"
        );
        self.persist_and_notify(&snapshot, event).await
    }

    /// Merges `partial` into the user overrides in one step.
    ///
    /// Persists once and emits a single `batch_update` event carrying the
    /// full configurations before and after. Like `set`, this does not
    /// apply the validation rules.
    #[instrument(skip(self, partial))]
    pub async fn update(&self, partial: UserConfig) -> ConfigurationResult<()> {
        let (snapshot, event) = {
            let mut state = self.lock_state();

            let before = to_json(&state.merged.config)?;
            let user_config = self.merger.merge_overrides(&state.user_config, &partial);
            self.apply_user_config(&mut state, user_config);
            let after = to_json(&state.merged.config)?;

            (
                state.user_config.clone(),
                ConfigChangeEvent::new(ChangeKey::BatchUpdate, before, after, ChangeSource::User),
            )
        };

        debug!("Configuration batch update applied");
        self.persist_and_notify(&snapshot, event).await
    }

    /// Clears every user override.
    ///
    /// The merged configuration returns to the system defaults with source
    /// `system`; the empty override object is persisted and a `reset` event
    /// is emitted.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> ConfigurationResult<()> {
        let (snapshot, event) = {
            let mut state = self.lock_state();

            let before = to_json(&state.merged.config)?;
            state.user_config = UserConfig::default();
            state.merged = MergedConfiguration::from_defaults(&self.defaults);
            let after = to_json(&state.merged.config)?;

            (
                state.user_config.clone(),
                ConfigChangeEvent::new(ChangeKey::Reset, before, after, ChangeSource::System),
            )
        };

        info!("Configuration reset to system defaults");
        self.persist_and_notify(&snapshot, event).await
    }

    /// Checks `config` against the validation rules. Pure.
    pub fn validate(&self, config: &UserConfig) -> ValidationResult {
        self.validator.validate_overrides(config)
    }

    /// Checks the current merged configuration against the validation rules.
    pub fn validate_current(&self) -> ValidationResult {
        self.validator.validate_config(&self.config())
    }

    /// Validates `partial` and, if it passes, applies it like `update`.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` with every error found; nothing is applied.
    #[instrument(skip(self, partial))]
    pub async fn import(&self, partial: UserConfig) -> ConfigurationResult<()> {
        let result = self.validate(&partial);
        if !result.is_valid() {
            warn!(
                error_count = result.errors.len(),
                "Rejected configuration import"
            );
            return Err(ConfigurationError::validation_failed(result.errors));
        }

        for warning in &result.warnings {
            warn!(field = %warning.field_path, "{}", warning.message);
        }

        self.update(partial).await
    }

    /// Imports an exported configuration document.
    ///
    /// # Errors
    ///
    /// `ParseError` if `json` is not a `{ "data": ..., "metadata": ... }`
    /// document whose data fits the schema, then anything `import` returns.
    pub async fn import_json(&self, json: &str) -> ConfigurationResult<()> {
        let document: ImportDocument =
            serde_json::from_str(json).map_err(|e| ConfigurationError::ParseError {
                reason: e.to_string(),
            })?;

        if let Some(metadata) = &document.metadata {
            debug!(
                version = %metadata.version,
                source = %metadata.source,
                "Importing configuration export"
            );
        }

        self.import(document.data).await
    }

    /// Snapshot of the merged configuration and its metadata.
    pub fn export(&self) -> ConfigExport {
        let state = self.lock_state();
        ConfigExport {
            data: state.merged.config.clone(),
            metadata: state.merged.metadata.clone(),
        }
    }

    /// [`ConfigStore::export`] as pretty-printed JSON.
    pub fn export_json(&self) -> ConfigurationResult<String> {
        serde_json::to_string_pretty(&self.export()).map_err(|e| ConfigurationError::ParseError {
            reason: e.to_string(),
        })
    }

    /// Registers a listener called once per successful mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ConfigChangeEvent) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    fn apply_user_config(&self, state: &mut StoreState, user_config: UserConfig) {
        state.merged = self.merger.merge(&self.defaults, &user_config);
        state.user_config = user_config;
    }

    async fn persist_and_notify(
        &self,
        user_config: &UserConfig,
        event: ConfigChangeEvent,
    ) -> ConfigurationResult<()> {
        let value = to_json(user_config)?;
        if let Err(e) = self.storage.set(USER_CONFIG_KEY, value).await {
            error!(key = %event.key, error = %e, "Failed to persist user configuration");
            return Err(e);
        }

        let failures = self.listeners.notify(&event);
        if failures > 0 {
            warn!(key = %event.key, failures, "Some configuration listeners failed");
        }
        Ok(())
    }

    fn lock_state(&self) -> MutexGuard<'_, StoreState> {
        // State is only replaced wholesale under the lock, never left half
        // written, so a poisoned lock is still usable.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("status", &self.status())
            .field("defaults_version", &self.defaults.version())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

fn to_json<T: Serialize>(value: &T) -> ConfigurationResult<Value> {
    serde_json::to_value(value).map_err(|e| ConfigurationError::ParseError {
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "config_store_tests.rs"]
mod tests;
