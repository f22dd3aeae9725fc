//! Browser Session Storage
//!
//! `SessionStorage` over `window.localStorage`. Storage access failures
//! (private browsing, disabled storage) behave like an empty store.

use todo_core::SessionStorage;

/// Looks up `localStorage` on every call so the handle stays `Send + Sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!(key, "Failed to write localStorage");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
