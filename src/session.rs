//! Session persistence.
//!
//! A session is a token plus the cached user record, both kept in browser
//! local storage under the `token` and `user` keys. The presence of a token is
//! the only authorization signal the storefront has; there is no expiry or
//! refresh.

use std::cell::RefCell;
use std::collections::HashMap;

use eventticket_wire::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key/value storage the session is persisted in
pub trait SessionStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. On native builds every read misses and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let saved = Self::storage()
                .and_then(|s| s.set_item(key, value).ok())
                .is_some();
            if !saved {
                tracing::warn!("Failed to write {} to localStorage", key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Snapshot of the signed-in state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_staff)
    }
}

/// Reads and writes the session through a `SessionStorage`
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted session. A corrupt user record is dropped.
    pub fn load(&self) -> Session {
        let token = self.storage.load(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self
            .storage
            .load(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("Discarding unreadable cached user: {}", e);
                    None
                }
            });
        Session { token, user }
    }

    /// Persist a fresh sign-in. A missing token is stored as an empty string.
    pub fn save(&self, token: Option<&str>, user: &User) -> Session {
        let token = token.unwrap_or_default();
        self.storage.save(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.storage.save(USER_KEY, &json),
            Err(e) => tracing::warn!("Failed to serialize user: {}", e),
        }
        Session {
            token: Some(token.to_string()).filter(|t| !t.is_empty()),
            user: Some(user.clone()),
        }
    }

    /// Forget the session (logout)
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 9,
            username: "deniz".to_string(),
            first_name: "Deniz".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.load(), Session::default());

        let saved = store.save(Some("abc123"), &user());
        assert!(saved.is_authenticated());

        let loaded = store.load();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.user.unwrap().username, "deniz");
    }

    #[test]
    fn test_missing_token_is_not_authenticated() {
        let store = SessionStore::new(MemoryStorage::default());
        let session = store.save(None, &user());
        assert!(!session.is_authenticated());
        assert!(session.user.is_some());
        assert!(!store.load().is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage);
        store.save(Some("t"), &user());
        store.clear();
        assert_eq!(store.load(), Session::default());
    }

    #[test]
    fn test_corrupt_user_record_is_dropped() {
        let storage = MemoryStorage::default();
        storage.save(TOKEN_KEY, "t");
        storage.save(USER_KEY, "{not json");
        let session = SessionStore::new(storage).load();
        assert!(session.is_authenticated());
        assert!(session.user.is_none());
    }
}
