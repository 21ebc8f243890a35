//! Tests for configuration storage backends.

use super::*;
use serde_json::json;

/// Backend that is never reachable.
struct UnavailableStorage;

#[async_trait]
impl ConfigStorage for UnavailableStorage {
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>> {
        Err(ConfigurationError::StorageUnavailable {
            key: key.to_string(),
            reason: "host storage missing".to_string(),
        })
    }

    async fn set(&self, key: &str, _value: Value) -> ConfigurationResult<()> {
        Err(ConfigurationError::StorageUnavailable {
            key: key.to_string(),
            reason: "host storage missing".to_string(),
        })
    }
}

/// Backend whose stored value cannot be decoded.
struct CorruptStorage;

#[async_trait]
impl ConfigStorage for CorruptStorage {
    async fn get(&self, key: &str) -> ConfigurationResult<Option<Value>> {
        Err(ConfigurationError::StorageCorrupt {
            key: key.to_string(),
            reason: "garbage".to_string(),
        })
    }

    async fn set(&self, _key: &str, _value: Value) -> ConfigurationResult<()> {
        Ok(())
    }
}

// ============================================================================
// MemoryStorage
// ============================================================================

#[tokio::test]
async fn test_memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("user-config").await.unwrap(), None);
}

#[tokio::test]
async fn test_memory_storage_set_replaces_value() {
    let storage = MemoryStorage::with_entry("user-config", json!({ "a": 1 }));

    storage.set("user-config", json!({ "b": 2 })).await.unwrap();

    assert_eq!(
        storage.get("user-config").await.unwrap(),
        Some(json!({ "b": 2 }))
    );
}

// ============================================================================
// FileStorage
// ============================================================================

#[tokio::test]
async fn test_file_storage_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    assert_eq!(storage.get("user-config").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_storage_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let value = json!({ "security": { "autoLockTimeout": 30 } });

    FileStorage::new(dir.path())
        .set("user-config", value.clone())
        .await
        .unwrap();

    let reopened = FileStorage::new(dir.path());
    assert_eq!(reopened.get("user-config").await.unwrap(), Some(value));
}

#[tokio::test]
async fn test_file_storage_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profiles").join("default");
    let storage = FileStorage::new(&nested);

    storage.set("active-theme", json!("dark")).await.unwrap();

    assert!(storage.path_for_key("active-theme").exists());
    assert_eq!(leftover_temp_files(&nested), 0);
}

#[tokio::test]
async fn test_file_storage_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    std::fs::write(storage.path_for_key("user-config"), "{ not json").unwrap();

    let result = storage.get("user-config").await;

    assert!(matches!(
        result,
        Err(ConfigurationError::StorageCorrupt { .. })
    ));
}

#[test]
fn test_file_storage_encodes_keys() {
    let storage = FileStorage::new("/tmp/kai");
    assert_eq!(
        storage.path_for_key("../user config"),
        PathBuf::from("/tmp/kai/%2E%2E%2Fuser%20config.json")
    );
    assert_eq!(
        storage.path_for_key("user-config"),
        PathBuf::from("/tmp/kai/user-config.json")
    );
}

#[test]
fn test_file_storage_distinct_keys_use_distinct_files() {
    let storage = FileStorage::new("/tmp/kai");
    let keys = ["user-config", "user.config", "user_config", "user%2Econfig"];

    let paths: std::collections::HashSet<PathBuf> =
        keys.iter().map(|key| storage.path_for_key(key)).collect();

    assert_eq!(paths.len(), keys.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_file_storage_concurrent_writes_to_one_key() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::new(dir.path()));

    for round in 0..20 {
        let writes: Vec<_> = (0..4)
            .map(|writer| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    storage
                        .set("user-config", json!({ "round": round, "writer": writer }))
                        .await
                })
            })
            .collect();

        for write in writes {
            write.await.unwrap().unwrap();
        }

        let stored = storage.get("user-config").await.unwrap().unwrap();
        assert_eq!(stored["round"], json!(round));
    }

    assert_eq!(leftover_temp_files(dir.path()), 0);
}

fn leftover_temp_files(directory: &Path) -> usize {
    std::fs::read_dir(directory)
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .ends_with(".tmp")
        })
        .count()
}

// ============================================================================
// FallbackStorage
// ============================================================================

#[tokio::test]
async fn test_fallback_storage_uses_primary_when_available() {
    let primary = Arc::new(MemoryStorage::new());
    let secondary = Arc::new(MemoryStorage::new());
    let storage = FallbackStorage::new(primary.clone(), secondary.clone());

    storage.set("user-config", json!({ "x": 1 })).await.unwrap();

    assert_eq!(primary.get("user-config").await.unwrap(), Some(json!({ "x": 1 })));
    assert_eq!(secondary.get("user-config").await.unwrap(), None);
}

#[tokio::test]
async fn test_fallback_storage_uses_secondary_when_primary_unavailable() {
    let secondary = Arc::new(MemoryStorage::new());
    let storage = FallbackStorage::new(Arc::new(UnavailableStorage), secondary.clone());

    storage.set("user-config", json!({ "x": 1 })).await.unwrap();

    assert_eq!(storage.get("user-config").await.unwrap(), Some(json!({ "x": 1 })));
    assert_eq!(secondary.get("user-config").await.unwrap(), Some(json!({ "x": 1 })));
}

#[tokio::test]
async fn test_fallback_storage_does_not_mask_corruption() {
    let storage = FallbackStorage::new(Arc::new(CorruptStorage), Arc::new(MemoryStorage::new()));

    let result = storage.get("user-config").await;

    assert!(matches!(
        result,
        Err(ConfigurationError::StorageCorrupt { .. })
    ));
}
