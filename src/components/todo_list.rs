//! Todo List Component
//!
//! The todos a tab shows, with select-all and bulk delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::domain::{can_delete, Todo};
use todo_core::view::{filter_todos, ListFilter, Tab};

use crate::components::{DeleteConfirmButton, TodoRow};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList(tab: Tab, set_completing: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let filter = ctx.filters.with(|f| ListFilter::from(f));
        let now = ctx.now.get();
        ctx.user.with(|user| {
            let Some(user) = user else { return Vec::new() };
            store.todos().with(|s| {
                filter_todos(&s.todos, user, tab, &filter, now)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Todo>>()
            })
        })
    });

    // Only todos the user may delete can be ticked
    let deletable = Memo::new(move |_| {
        ctx.user.with(|user| {
            let Some(user) = user else { return Vec::new() };
            visible.with(|todos| todos.iter().filter(|t| can_delete(user, t)).cloned().collect::<Vec<Todo>>())
        })
    });

    let all_selected = move || {
        deletable.with(|todos| {
            let refs: Vec<&Todo> = todos.iter().collect();
            store.selection().with(|s| s.all_selected(&refs))
        })
    };

    let toggle_all = move |_| {
        deletable.with_untracked(|todos| {
            let refs: Vec<&Todo> = todos.iter().collect();
            store.selection().write().toggle_all(&refs);
        });
    };

    let bulk_delete = move |_| {
        let ids = store.selection().with_untracked(|s| s.ids().to_vec());
        let hook = ctx.hook();
        spawn_local(async move {
            if hook.bulk_delete_todos(&ids).await.is_ok() {
                store.selection().write().clear();
            }
        });
    };

    let selected_count = move || store.selection().with(|s| s.len());

    view! {
        <div class="todo-list">
            <Show when=move || deletable.with(|t| !t.is_empty())>
                <div class="bulk-bar">
                    <label class="select-all">
                        <input type="checkbox" prop:checked=all_selected on:change=toggle_all />
                        "Select all"
                    </label>
                    <DeleteConfirmButton
                        button_class="bulk-delete-btn"
                        label="Delete selected"
                        disabled=Signal::derive(move || selected_count() == 0)
                        on_confirm=bulk_delete
                    />
                    <span class="selected-count">{move || format!("{} selected", selected_count())}</span>
                </div>
            </Show>

            <Show when=move || store.todos().read().loading>
                <p class="loading">"Loading..."</p>
            </Show>

            <For
                each=move || visible.get()
                key=|todo| {
                    (
                        todo.id.clone(),
                        todo.status,
                        todo.title.clone(),
                        todo.description.clone(),
                        todo.completion_note.clone(),
                    )
                }
                children=move |todo| view! { <TodoRow todo=todo set_completing=set_completing /> }
            />

            <Show when=move || visible.with(Vec::is_empty) && !store.todos().read().loading>
                <p class="empty-list">"No todos here yet."</p>
            </Show>
        </div>
    }
}
