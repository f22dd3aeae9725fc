//! Delete Confirm Button Component
//!
//! A delete action that takes two clicks.

use leptos::prelude::*;

/// Button that swaps itself for a yes/no prompt before running `on_confirm`.
/// Either answer returns it to the idle button.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "×".to_string())] label: String,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    // Rows react to clicks too
    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        armed.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    let idle = move || {
        let class = button_class.clone();
        let label = label.clone();
        view! {
            <button
                class=class
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    armed.set(true);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=idle>
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">"Delete?"</span>
                <button class="confirm-btn" title="Delete" on:click=move |ev| answer(ev, true)>"✓"</button>
                <button class="cancel-btn" title="Keep" on:click=move |ev| answer(ev, false)>"✗"</button>
            </span>
        </Show>
    }
}
