//! Application configuration for Kai-CD.
//!
//! Layers sparse user overrides over immutable system defaults, persists the
//! overrides through a pluggable key/value storage, validates imports and
//! notifies subscribers of every change. Custom UI themes live alongside the
//! configuration in the same storage.
//!
//! # Overview
//!
//! - [`ConfigStore`] is the entry point: read, set, update, reset, import,
//!   export and subscribe.
//! - [`AppConfig`] / [`UserConfig`] are the complete and sparse schema.
//! - [`ConfigurationMerger`] merges overrides over [`SystemDefaults`].
//! - [`ConfigStorage`] is the persistence seam, with [`MemoryStorage`],
//!   [`FileStorage`] and [`FallbackStorage`].
//! - [`ThemeManager`] manages built-in and custom themes.
//!
//! # Examples
//!
//! ```rust
//! use kai_config::{ConfigStore, FileStorage};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), kai_config::ConfigurationError> {
//! # let dir = tempfile::tempdir().unwrap();
//! let store = ConfigStore::new(Arc::new(FileStorage::new(dir.path())));
//! store.initialize().await;
//!
//! let _subscription = store.subscribe(|event| {
//!     println!("{} changed: {} -> {}", event.key, event.old_value, event.new_value);
//! });
//!
//! store.set("developer.featureFlags.enableGraphExecutionUi", json!(true)).await?;
//! assert!(store.config().developer.feature_flags.enable_graph_execution_ui);
//! # Ok(())
//! # }
//! ```

pub mod app_config;
pub mod basic_validator;
pub mod config_store;
pub mod errors;
pub mod events;
pub mod logging;
pub mod merged_config;
pub mod merger;
pub mod path;
pub mod settings;
pub mod storage;
pub mod system_defaults;
pub mod themes;
pub mod validator;

// Re-export for convenient access
pub use app_config::{AppConfig, UserConfig};
pub use basic_validator::BasicConfigurationValidator;
pub use config_store::{ConfigStore, StoreStatus, USER_CONFIG_KEY};
pub use errors::{ConfigurationError, ConfigurationResult};
pub use events::{ChangeKey, ChangeSource, ConfigChangeEvent, ListenerRegistry, Subscription};
pub use logging::init_tracing;
pub use merged_config::{
    ConfigExport, ConfigMetadata, ConfigurationSource, ConfigurationSourceTrace,
    MergedConfiguration,
};
pub use merger::ConfigurationMerger;
pub use path::ConfigPath;
pub use storage::{ConfigStorage, FallbackStorage, FileStorage, MemoryStorage};
pub use system_defaults::{SystemDefaults, SYSTEM_CONFIG_VERSION};
pub use themes::{
    CustomTheme, ThemeColorPalette, ThemeDraft, ThemeImportReport, ThemeManager, ThemeOptions,
    ThemePreference,
};
pub use validator::{
    ConfigurationValidator, ValidationError, ValidationErrorType, ValidationResult,
    ValidationWarning,
};
