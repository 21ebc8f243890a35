//! Configuration change events and subscriptions.
//!
//! Every successful mutation of the store produces one `ConfigChangeEvent`
//! which is handed, synchronously and in registration order, to every
//! registered listener. A listener that panics is caught and logged; the
//! remaining listeners still run and the mutation still succeeds.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tracing::{debug, error};

/// Key of the event emitted by a batch update.
pub const BATCH_UPDATE_KEY: &str = "batch_update";

/// Key of the event emitted by a reset.
pub const RESET_KEY: &str = "reset";

/// What a change event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeKey {
    /// A single dotted path changed through `set`.
    Path(String),

    /// Several leaves changed through `update` or `import`.
    BatchUpdate,

    /// All overrides were cleared.
    Reset,
}

impl ChangeKey {
    pub fn as_str(&self) -> &str {
        match self {
            ChangeKey::Path(path) => path,
            ChangeKey::BatchUpdate => BATCH_UPDATE_KEY,
            ChangeKey::Reset => RESET_KEY,
        }
    }
}

impl std::fmt::Display for ChangeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ChangeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Who caused a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    /// The store itself (reset to defaults).
    System,

    /// A user edit (`set`, `update`, `import`).
    User,
}

/// Immutable record of one configuration mutation.
///
/// For path events the values are the leaf before and after (`Null` when
/// absent). For batch and reset events they are the complete merged
/// configurations before and after.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigChangeEvent {
    pub key: ChangeKey,
    pub old_value: Value,
    pub new_value: Value,
    pub source: ChangeSource,
    pub timestamp: DateTime<Utc>,
}

impl ConfigChangeEvent {
    pub fn new(key: ChangeKey, old_value: Value, new_value: Value, source: ChangeSource) -> Self {
        Self {
            key,
            old_value,
            new_value,
            source,
            timestamp: Utc::now(),
        }
    }
}

/// Listener callback.
pub type ConfigListener = Arc<dyn Fn(&ConfigChangeEvent) + Send + Sync>;

#[derive(Default)]
struct RegistryInner {
    next_id: u64,
    listeners: BTreeMap<u64, ConfigListener>,
}

/// Registered change listeners.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns the handle that removes it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&ConfigChangeEvent) + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Arc::new(listener));
        debug!(subscription_id = id, "Listener subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Calls every listener once with `event`.
    ///
    /// The registry lock is released before listeners run, so a listener may
    /// subscribe or unsubscribe without deadlocking. Returns the number of
    /// listeners that panicked.
    pub fn notify(&self, event: &ConfigChangeEvent) -> usize {
        let listeners: Vec<(u64, ConfigListener)> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        let mut failures = 0;
        for (id, listener) in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                failures += 1;
                error!(
                    subscription_id = id,
                    key = %event.key,
                    "Configuration listener panicked"
                );
            }
        }
        failures
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<RegistryInner>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Removes the listener. Returns `false` if it was already gone or the
    /// registry no longer exists.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.registry.upgrade() else {
            return false;
        };
        let removed = lock(&inner).listeners.remove(&self.id).is_some();
        debug!(subscription_id = self.id, removed, "Listener unsubscribed");
        removed
    }
}

fn lock(inner: &Mutex<RegistryInner>) -> MutexGuard<'_, RegistryInner> {
    // Listeners never run under the lock, so a poisoned lock still holds
    // consistent data.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
