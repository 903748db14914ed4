use super::*;
use crate::data::directory::MOCK_CREDENTIALS;
use crate::util::storage::MemoryStorage;

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::default())
}

fn store_over(storage: &Arc<MemoryStorage>) -> SessionStore {
    SessionStore::new(storage.clone())
}

fn sample_user() -> User {
    User {
        id: "42".to_owned(),
        name: "Test Traveler".to_owned(),
        email: "test@example.com".to_owned(),
        avatar: "https://example.com/a.svg".to_owned(),
        bio: Some("Here and there".to_owned()),
    }
}

/// Backend that reports no storage at all, like a non-browser context.
struct UnavailableStorage;

impl KeyValueStore for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Backend whose writes fail, like a full quota.
#[derive(Default)]
struct ReadOnlyStorage {
    inner: MemoryStorage,
}

impl KeyValueStore for ReadOnlyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("quota exceeded".to_owned()))
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_store_is_loading() {
    let store = SessionStore::new(memory());
    assert!(store.is_loading());
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn initialize_with_empty_storage_is_signed_out() {
    let mut store = SessionStore::new(memory());
    store.initialize();
    assert!(!store.is_loading());
    assert!(!store.is_authenticated());
}

#[test]
fn initialize_without_backend_resolves_signed_out() {
    let mut store = SessionStore::new(Arc::new(UnavailableStorage));
    store.initialize();
    assert!(!store.is_loading());
    assert!(store.current_user().is_none());
}

#[test]
fn initialize_restores_persisted_session() {
    let storage = memory();
    storage.set(AUTH_FLAG_KEY, "true").unwrap();
    storage.set(USER_KEY, &serde_json::to_string(&sample_user()).unwrap()).unwrap();

    let mut store = store_over(&storage);
    store.initialize();
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(&sample_user()));
}

#[test]
fn initialize_ignores_flag_other_than_true() {
    let storage = memory();
    storage.set(AUTH_FLAG_KEY, "TRUE").unwrap();
    storage.set(USER_KEY, &serde_json::to_string(&sample_user()).unwrap()).unwrap();

    let mut store = store_over(&storage);
    store.initialize();
    assert!(!store.is_authenticated());
}

#[test]
fn initialize_requires_snapshot() {
    let storage = memory();
    storage.set(AUTH_FLAG_KEY, "true").unwrap();

    let mut store = store_over(&storage);
    store.initialize();
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
}

#[test]
fn initialize_with_corrupt_snapshot_clears_storage() {
    let storage = memory();
    storage.set(AUTH_FLAG_KEY, "true").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();

    let mut store = store_over(&storage);
    store.initialize();
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
    assert!(storage.is_empty());
}

// =============================================================
// authenticate
// =============================================================

#[test]
fn authenticate_known_account_succeeds() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.initialize();

    assert_eq!(store.authenticate("john@example.com", "password123"), Ok(()));
    assert!(store.is_authenticated());
    assert_eq!(store.current_user().map(|u| u.email.as_str()), Some("john@example.com"));
    assert_eq!(storage.get(AUTH_FLAG_KEY), Ok(Some("true".to_owned())));
}

#[test]
fn authenticate_wrong_password_fails() {
    let mut store = SessionStore::new(memory());
    store.initialize();

    let err = store.authenticate("john@example.com", "wrong").unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
    assert!(!store.is_authenticated());
}

#[test]
fn authenticate_failure_message_is_generic() {
    let mut store = SessionStore::new(memory());
    let wrong_password = store.authenticate("john@example.com", "nope").unwrap_err();
    let unknown_email = store.authenticate("ghost@example.com", "password123").unwrap_err();
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(!wrong_password.to_string().is_empty());
}

#[test]
fn authenticate_every_directory_entry() {
    for record in MOCK_CREDENTIALS {
        let mut store = SessionStore::new(memory());
        store.initialize();
        assert_eq!(store.authenticate(record.email, record.password), Ok(()));
        assert_eq!(store.current_user().map(|u| u.email.as_str()), Some(record.email));
    }
}

#[test]
fn authenticate_failure_keeps_existing_session() {
    let mut store = SessionStore::new(memory());
    store.initialize();
    store.authenticate("sarah@example.com", "travel2024").unwrap();
    assert!(store.authenticate("sarah@example.com", "bad").is_err());
    assert_eq!(store.current_user().map(|u| u.id.as_str()), Some("2"));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_round_trips_through_storage() {
    let storage = memory();
    let mut first = store_over(&storage);
    first.initialize();
    first.login(sample_user());

    let mut second = store_over(&storage);
    second.initialize();
    assert_eq!(second.current_user(), Some(&sample_user()));
    assert!(second.is_authenticated());
}

#[test]
fn login_persists_snapshot_json() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login(sample_user());

    let raw = storage.get(USER_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "test@example.com");
    assert_eq!(value["bio"], "Here and there");
}

#[test]
fn login_ends_loading() {
    let mut store = SessionStore::new(memory());
    store.login(sample_user());
    assert!(!store.is_loading());
}

#[test]
fn login_survives_write_failure() {
    let mut store = SessionStore::new(Arc::new(ReadOnlyStorage::default()));
    store.initialize();
    store.login(sample_user());
    assert!(store.is_authenticated());
}

#[test]
fn logout_clears_session_and_storage() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.initialize();
    store.authenticate("emma@example.com", "adventure123").unwrap();

    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert_eq!(storage.get(AUTH_FLAG_KEY), Ok(None));
    assert_eq!(storage.get(USER_KEY), Ok(None));
}

#[test]
fn logout_twice_matches_once() {
    let storage = memory();
    let mut store = store_over(&storage);
    store.login(sample_user());

    store.logout();
    let once = store.state().clone();
    store.logout();
    assert_eq!(store.state(), &once);
    assert!(storage.is_empty());
}

#[test]
fn logout_without_backend_is_harmless() {
    let mut store = SessionStore::new(Arc::new(UnavailableStorage));
    store.initialize();
    store.logout();
    assert!(!store.is_authenticated());
    assert!(!store.is_loading());
}

#[test]
fn cloned_store_shares_storage() {
    let storage = memory();
    let mut store = store_over(&storage);
    let copy = store.clone();
    store.login(sample_user());

    let mut restored = copy;
    restored.initialize();
    assert!(restored.is_authenticated());
}
