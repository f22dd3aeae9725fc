//! Complete Modal Component
//!
//! Asks for an optional completion note before completing a todo.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CompleteModal(
    completing: ReadSignal<Option<String>>,
    set_completing: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (note, set_note) = signal(String::new());

    let title = move || {
        completing.with(|id| {
            id.as_deref()
                .and_then(|id| store.todos().with(|s| s.find(id).map(|t| t.title.clone())))
                .unwrap_or_default()
        })
    };

    let close = move || {
        set_note.set(String::new());
        set_completing.set(None);
    };

    let confirm = move |_| {
        let Some(id) = completing.get_untracked() else { return };
        let note = note.get_untracked();
        let hook = ctx.hook();
        spawn_local(async move {
            if hook.complete_todo(&id, Some(note)).await.is_ok() {
                close();
            }
        });
    };

    view! {
        <Show when=move || completing.with(Option::is_some)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Complete todo"</h2>
                    <p class="modal-subtitle">{title}</p>
                    <textarea
                        placeholder="Completion note (optional)"
                        prop:value=move || note.get()
                        on:input=move |ev| set_note.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                        <button
                            class="confirm-btn"
                            disabled=move || store.todos().read().loading
                            on:click=confirm
                        >
                            "Mark complete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
