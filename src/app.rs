//! Todo Dashboard App
//!
//! Root component: auth gate, data loading and the tabbed dashboard.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rolling_logger::RollingLogger;
use todo_core::view::Tab;
use todo_core::{ApiClient, ClientConfig, ProfileRefresh, Session, TodoHook};

use crate::components::{
    Analytics, CompleteModal, ErrorBanner, FilterBar, HeaderBar, LoginForm, TabBar, TodoForm, TodoList,
};
use crate::context::{use_app_context, AppContext};
use crate::storage::BrowserStorage;
use crate::store::{store_prune_selection, AppState, AppStateStoreFields, StoreCell};

const MINUTE_MS: u32 = 60_000;

#[component]
pub fn App(logger: RollingLogger) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let config = ClientConfig::from_build_env();
    tracing::info!(base_url = %config.base_url, "Starting dashboard");
    let api = ApiClient::new(config, Session::new(BrowserStorage));
    let hook = TodoHook::new(api, StoreCell(store));

    let (now, set_now) = signal(Utc::now());
    let ctx = AppContext::new(hook, logger, store, now);
    provide_context(ctx);

    // Keep remaining-days and overdue badges current
    spawn_local(async move {
        loop {
            TimeoutFuture::new(MINUTE_MS).await;
            set_now.set(Utc::now());
        }
    });

    // Validate a restored session with the server
    if ctx.api().session().is_authenticated() {
        let api = ctx.api();
        spawn_local(async move {
            match api.current_user().await {
                Ok(user) => match api.session().refresh_user(&user) {
                    ProfileRefresh::SignIn => ctx.sign_in(user),
                    ProfileRefresh::Updated => ctx.user.set(Some(user)),
                    ProfileRefresh::Unchanged => {}
                },
                Err(e) if e.is_unauthorized() => {
                    tracing::info!("Stored session rejected, signing out");
                    api.session().clear();
                    ctx.user.set(None);
                }
                Err(e) => tracing::warn!(error = %e, "Could not validate session, keeping cached profile"),
            }
        });
    }

    // Stats and assignees once per sign-in
    Effect::new(move |_| {
        let Some(user) = ctx.user.get() else { return };
        let hook = ctx.hook();
        spawn_local(async move {
            hook.fetch_stats().await;
            if user.is_admin() {
                match hook.api().all_users().await {
                    Ok(users) => store.users().set(users),
                    Err(e) => tracing::warn!(error = %e, "Failed to load users"),
                }
            }
        });
    });

    // List, re-fetched whenever the filters change
    Effect::new(move |_| {
        if ctx.user.with(Option::is_none) {
            return;
        }
        let filters = ctx.filters.get();
        let hook = ctx.hook();
        spawn_local(async move {
            hook.fetch_todos(&filters).await;
            store_prune_selection(&store);
        });
    });

    view! {
        <Show
            when=move || ctx.user.with(Option::is_some)
            fallback=|| view! { <LoginForm /> }
        >
            <Dashboard />
        </Show>
    }
}

/// Header, tabs and the body of the current tab
#[component]
fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let (completing, set_completing) = signal::<Option<String>>(None);

    let tab_body = move || match ctx.tab.get() {
        Tab::Create => view! {
            <TodoForm />
            <TodoList tab=Tab::Create set_completing=set_completing />
        }
        .into_any(),
        tab @ (Tab::List | Tab::Assignments) => view! {
            <FilterBar />
            <TodoList tab=tab set_completing=set_completing />
        }
        .into_any(),
        tab @ (Tab::InProgress | Tab::Completed) => view! {
            <TodoList tab=tab set_completing=set_completing />
        }
        .into_any(),
        Tab::Analytics => view! { <Analytics /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <HeaderBar />
            <main class="main-content">
                <TabBar />
                <ErrorBanner />
                {tab_body}
            </main>
            <CompleteModal completing=completing set_completing=set_completing />
        </div>
    }
}
