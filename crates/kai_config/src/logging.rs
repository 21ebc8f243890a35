//! Tracing setup driven by the `logging` configuration section.

use crate::settings::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Filter directive for the given settings.
///
/// Disabled logging and the `silent` level both map to `off`.
pub fn filter_directive(settings: &LoggingSettings) -> &'static str {
    if settings.enabled {
        settings.level.as_filter_directive()
    } else {
        "off"
    }
}

/// `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(settings)))
}

/// Installs a global `fmt` subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
