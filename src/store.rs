//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::domain::User;
use todo_core::{Selection, StateCell, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todo list, stats, loading flag and last error, driven by the hook
    pub todos: TodoState,
    /// Assignee choices for admins
    pub users: Vec<User>,
    /// Ids ticked for bulk delete
    pub selection: Selection,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Lets the todo hook write straight into the store's `todos` field
#[derive(Clone, Copy)]
pub struct StoreCell(pub AppStore);

impl StateCell for StoreCell {
    fn update(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.0.todos().write());
    }

    fn snapshot(&self) -> TodoState {
        self.0.todos().get_untracked()
    }
}

/// Drops ticked ids that left the list
pub fn store_prune_selection(store: &AppStore) {
    let todos = store.todos().read_untracked().todos.clone();
    store.selection().write().retain_present(&todos);
}

/// Resets everything tied to the signed-in user
pub fn store_reset(store: &AppStore) {
    store.todos().set(TodoState::default());
    store.users().set(Vec::new());
    store.selection().write().clear();
}
