//! Dotted configuration paths.
//!
//! A `ConfigPath` addresses a section or leaf by its JSON field names, e.g.
//! `security.autoLockTimeout` or `developer.featureFlags.enableGraphExecutionUi`.
//! Paths are parsed once and then used to read from and write into the JSON
//! view of a configuration.

use crate::errors::{ConfigurationError, ConfigurationResult};
use serde_json::{Map, Value};

/// A parsed, non-empty dotted path.
///
/// # Examples
///
/// ```rust
/// use kai_config::ConfigPath;
/// use serde_json::json;
///
/// let path = ConfigPath::parse("security.autoLockTimeout")?;
/// let config = json!({ "security": { "autoLockTimeout": 15 } });
///
/// assert_eq!(path.lookup(&config), Some(&json!(15)));
/// # Ok::<(), kai_config::ConfigurationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    raw: String,
    segments: Vec<String>,
}

impl ConfigPath {
    /// Parses a dotted path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPath` for an empty path or a path
    /// with an empty segment (`"security..x"`, `".ui"`).
    pub fn parse(path: &str) -> ConfigurationResult<Self> {
        if path.trim().is_empty() {
            return Err(ConfigurationError::InvalidPath {
                path: path.to_string(),
                reason: "path is empty".to_string(),
            });
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(ConfigurationError::InvalidPath {
                path: path.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walks `root` along the path.
    ///
    /// Returns `None` as soon as a segment is missing or a non-object is
    /// reached before the last segment.
    pub fn lookup<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| current.as_object()?.get(segment))
    }

    /// Writes `value` at the path inside `root`.
    ///
    /// Missing intermediate objects are created. An intermediate that is not
    /// an object is replaced by an empty object.
    pub fn assign(&self, root: &mut Value, value: Value) {
        let Some((last, parents)) = self.segments.split_last() else {
            return;
        };

        let mut current = root;
        for segment in parents {
            current = ensure_object(current)
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        ensure_object(current).insert(last.clone(), value);
    }
}

impl std::fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            ensure_object(other)
        }
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
