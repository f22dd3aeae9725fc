//! Error Banner Component
//!
//! Shows the hook's last error, with the recent warnings behind a
//! details toggle.

use leptos::prelude::*;
use tracing::Level;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const DETAIL_LINES: usize = 10;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (show_details, set_show_details) = signal(false);

    let error = move || store.todos().with(|s| s.error.clone());

    let details = move || {
        // Re-read the log whenever the error changes
        let _ = error();
        ctx.logger()
            .tail(DETAIL_LINES, Level::WARN)
            .into_iter()
            .map(|line| view! { <li>{line.to_string()}</li> })
            .collect_view()
    };

    view! {
        {move || error().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-message">{message}</span>
                <button class="link-btn" on:click=move |_| set_show_details.update(|s| *s = !*s)>
                    {move || if show_details.get() { "Hide details" } else { "Details" }}
                </button>
                <button
                    class="dismiss-btn"
                    on:click=move |_| {
                        set_show_details.set(false);
                        store.todos().write().error = None;
                    }
                >
                    "×"
                </button>
                <Show when=move || show_details.get()>
                    <ul class="error-details">{details}</ul>
                </Show>
            </div>
        })}
    }
}
