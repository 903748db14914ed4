//! Session store: the single owner of "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once by the app shell and provided as `RwSignal<SessionStore>`.
//! Guards and pages read `state()`; only `login`/`logout` (and `authenticate`,
//! which ends in `login`) change it.
//!
//! Persisted layout:
//! - `isAuthenticated` holds the literal `"true"` while signed in.
//! - `user` holds the JSON snapshot of [`User`].
//!
//! ERROR HANDLING
//! ==============
//! Storage and snapshot failures are logged and degrade to a signed-out
//! session. They never reach the user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::data::directory;
use crate::state::auth::AuthState;
use crate::types::User;
use crate::util::storage::{KeyValueStore, StorageError};

/// Storage key for the signed-in flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Storage key for the serialized user snapshot.
pub const USER_KEY: &str = "user";

const AUTH_FLAG_VALUE: &str = "true";

/// Internal restore/persist failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid user snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Failure returned by [`SessionStore::authenticate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Deliberately does not say whether the email or the password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Session state plus the storage it is persisted to.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    state: AuthState,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("state", &self.state).finish_non_exhaustive()
    }
}

impl SessionStore {
    /// New store in the loading state. Call [`initialize`](Self::initialize)
    /// before trusting any session data.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, state: AuthState::restoring() }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Restore the persisted session and leave the loading state.
    ///
    /// A missing backend resolves to signed-out. An unreadable snapshot also
    /// resolves to signed-out and clears both keys.
    pub fn initialize(&mut self) {
        self.state.user = match self.restore() {
            Ok(user) => user,
            Err(SessionError::Storage(StorageError::Unavailable)) => None,
            Err(e) => {
                leptos::logging::warn!("session restore failed: {e}");
                self.clear_persisted();
                None
            }
        };
        self.state.loading = false;
    }

    /// Check `email`/`password` against the demo directory and sign in on a
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for any pair the directory
    /// does not contain.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let record = directory::lookup(email, password).ok_or(AuthError::InvalidCredentials)?;
        self.login(record.to_user());
        Ok(())
    }

    /// Sign `user` in and persist the session.
    ///
    /// The in-memory session changes even when persisting fails.
    pub fn login(&mut self, user: User) {
        if let Err(e) = self.persist(&user) {
            leptos::logging::warn!("session persist failed: {e}");
        }
        self.state = AuthState { user: Some(user), loading: false };
    }

    /// Sign out and drop the persisted session. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.state = AuthState { user: None, loading: false };
        self.clear_persisted();
    }

    fn restore(&self) -> Result<Option<User>, SessionError> {
        let flag = self.storage.get(AUTH_FLAG_KEY)?;
        if flag.as_deref() != Some(AUTH_FLAG_VALUE) {
            return Ok(None);
        }
        let Some(raw) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn persist(&self, user: &User) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(AUTH_FLAG_KEY, AUTH_FLAG_VALUE)?;
        self.storage.set(USER_KEY, &raw)?;
        Ok(())
    }

    fn clear_persisted(&self) {
        for key in [AUTH_FLAG_KEY, USER_KEY] {
            match self.storage.remove(key) {
                Ok(()) | Err(StorageError::Unavailable) => {}
                Err(e) => leptos::logging::warn!("failed to clear {key}: {e}"),
            }
        }
    }
}
