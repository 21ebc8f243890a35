//! Configuration section types.
//!
//! Every section comes in two shapes: a complete `*Settings` struct used by
//! the system defaults and the merged configuration, and a sparse
//! `*Overrides` struct (all fields optional) used for user overrides.
//!
//! Field names serialize in camelCase so that dotted paths such as
//! `security.autoLockTimeout` address the same leaves in JSON and in Rust.

pub mod developer;
pub mod logging;
pub mod networking;
pub mod security;
pub mod services;
pub mod theme;
pub mod ui;

// Re-export all types for convenient access
pub use developer::{DeveloperOverrides, DeveloperSettings, FeatureFlagOverrides, FeatureFlags};
pub use logging::{LogLevel, LoggingOverrides, LoggingSettings};
pub use networking::{NetworkingOverrides, NetworkingSettings};
pub use security::{SecurityOverrides, SecuritySettings};
pub use services::{ServiceDefaultsOverrides, ServiceDefaultsSettings};
pub use theme::{ThemeOverrides, ThemeSettings};
pub use ui::{ThemeMode, UiOverrides, UiSettings};
