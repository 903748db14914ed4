use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::default();
    assert!(storage.is_empty());
    assert_eq!(storage.get("user"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::default();
    storage.set("isAuthenticated", "true").unwrap();
    assert_eq!(storage.get("isAuthenticated"), Ok(Some("true".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::default();
    storage.set("k", "a").unwrap();
    storage.set("k", "b").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("b".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.remove("missing"), Ok(()));
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    assert!(storage.is_empty());
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_without_hydrate() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("user"), Err(StorageError::Unavailable));
    assert_eq!(storage.set("user", "{}"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("user"), Err(StorageError::Unavailable));
}

#[test]
fn storage_error_messages_are_descriptive() {
    assert_eq!(
        StorageError::Backend("quota exceeded".to_owned()).to_string(),
        "storage backend error: quota exceeded"
    );
    assert!(StorageError::Unavailable.to_string().contains("not available"));
}
