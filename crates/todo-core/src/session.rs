//! Session Credentials
//!
//! The bearer token and cached user profile, persisted under fixed keys
//! in whatever key-value storage the host provides. A `Session` is handed
//! to the client explicitly; there is no process-wide token.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::{AuthResponse, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persistent string storage (browser `localStorage`, memory, ...)
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage for tests and native hosts
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// How a server-confirmed profile relates to the cached one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRefresh {
    /// Nothing was cached, or the id or role differs
    SignIn,
    /// Same user, some fields changed
    Updated,
    Unchanged,
}

#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Cached profile. A malformed entry is treated as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed stored user profile");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn persist(&self, auth: &AuthResponse) {
        self.storage.set(TOKEN_KEY, &auth.token);
        self.set_user(&auth.user);
    }

    pub fn set_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize user profile"),
        }
    }

    /// Stores `user` as confirmed by the server and reports how it
    /// differs from what was cached.
    pub fn refresh_user(&self, user: &User) -> ProfileRefresh {
        let cached = self.user();
        self.set_user(user);
        match cached {
            None => ProfileRefresh::SignIn,
            Some(cached) if cached.id != user.id || cached.role != user.role => ProfileRefresh::SignIn,
            Some(cached) if cached == *user => ProfileRefresh::Unchanged,
            Some(_) => ProfileRefresh::Updated,
        }
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
