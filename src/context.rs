//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rolling_logger::RollingLogger;
use todo_core::domain::User;
use todo_core::view::Tab;
use todo_core::{ApiClient, TodoFilters, TodoHook};

use crate::store::{store_reset, AppStore, StoreCell};

pub type Hook = TodoHook<ApiClient, StoreCell>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user; `None` shows the login form
    pub user: RwSignal<Option<User>>,
    /// Current tab
    pub tab: RwSignal<Tab>,
    /// Server-side list filters; changing them re-fetches
    pub filters: RwSignal<TodoFilters>,
    /// Wall clock, refreshed every minute
    pub now: ReadSignal<DateTime<Utc>>,
    hook: StoredValue<Hook, LocalStorage>,
    logger: StoredValue<RollingLogger>,
    store: AppStore,
}

impl AppContext {
    pub fn new(hook: Hook, logger: RollingLogger, store: AppStore, now: ReadSignal<DateTime<Utc>>) -> Self {
        let user = hook.api().session().user();
        let tab = Tab::default_for(user.as_ref().map(|u| u.role).unwrap_or_default());
        Self {
            user: RwSignal::new(user),
            tab: RwSignal::new(tab),
            filters: RwSignal::new(TodoFilters::default()),
            now,
            hook: StoredValue::new_local(hook),
            logger: StoredValue::new(logger),
            store,
        }
    }

    pub fn hook(&self) -> Hook {
        self.hook.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.hook.with_value(|h| h.api().clone())
    }

    pub fn logger(&self) -> RollingLogger {
        self.logger.get_value()
    }

    /// Enters the dashboard as `user`
    pub fn sign_in(&self, user: User) {
        self.tab.set(Tab::default_for(user.role));
        self.filters.set(TodoFilters::default());
        self.user.set(Some(user));
    }

    /// Signs out locally right away; the server is told in the background.
    pub fn logout(&self) {
        let api = self.api();
        self.user.set(None);
        store_reset(&self.store);
        spawn_local(async move {
            let _ = api.logout().await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
