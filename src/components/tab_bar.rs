//! Tab Bar Component
//!
//! Role-dependent tabs for switching dashboard sections.

use leptos::prelude::*;
use todo_core::view::Tab;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let tabs = move || {
        ctx.user
            .with(|u| u.as_ref().map(|u| Tab::for_role(u.role).to_vec()))
            .unwrap_or_default()
    };

    view! {
        <nav class="tab-bar">
            <For
                each=tabs
                key=|tab| *tab
                children=move |tab| {
                    let is_active = move || ctx.tab.get() == tab;
                    let tab_class = move || if is_active() { "tab active" } else { "tab" };
                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| {
                                // Selection is per tab
                                store.selection().write().clear();
                                ctx.tab.set(tab);
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                }
            />
        </nav>
    }
}
