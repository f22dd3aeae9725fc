//! Header Bar Component
//!
//! App title, the signed-in user and the logout action.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();

    let user_label = move || {
        ctx.user.with(|u| {
            u.as_ref()
                .map(|u| format!("{} ({})", u.name, u.role.as_str()))
                .unwrap_or_default()
        })
    };

    view! {
        <header class="header-bar">
            <h1 class="header-title">"Todo Dashboard"</h1>
            <div class="header-user">
                <span class="header-user-name">{user_label}</span>
                <button class="logout-btn" on:click=move |_| ctx.logout()>"Logout"</button>
            </div>
        </header>
    }
}
