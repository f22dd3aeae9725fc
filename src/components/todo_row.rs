//! Todo Row Component
//!
//! A single todo with its badges and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::domain::{can_delete, Todo, TodoPatch, TodoStatus};
use todo_core::view::{due_label, is_overdue, remaining_days};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_prune_selection, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoRow(todo: Todo, set_completing: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = StoredValue::new(todo.id.clone());
    let status = todo.status;
    let completed = todo.is_completed();
    let deletable = ctx.user.with_untracked(|u| u.as_ref().is_some_and(|u| can_delete(u, &todo)));
    let is_admin = ctx.user.with_untracked(|u| u.as_ref().is_some_and(|u| u.is_admin()));

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(todo.title.clone());
    let (edit_description, set_edit_description) = signal(todo.description.clone().unwrap_or_default());

    let due = todo.due_date;
    let overdue_todo = todo.clone();
    let overdue = move || is_overdue(&overdue_todo, ctx.now.get());
    let row_class = move || {
        let mut c = String::from("todo-row");
        if completed {
            c.push_str(" completed");
        }
        if overdue() {
            c.push_str(" overdue");
        }
        c
    };

    let is_selected = move || store.selection().with(|s| s.is_selected(&id.read_value()));

    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = edit_title.get().trim().to_string();
        if title.is_empty() {
            return;
        }
        let patch = TodoPatch::text(title, edit_description.get());
        let hook = ctx.hook();
        let id = id.get_value();
        spawn_local(async move {
            if hook.update_todo(&id, patch).await.is_ok() {
                set_editing.set(false);
            }
        });
    };

    let toggle_status = move |_| {
        let hook = ctx.hook();
        let id = id.get_value();
        spawn_local(async move {
            let _ = hook.set_status(&id, status.toggled()).await;
        });
    };

    let delete = move |_| {
        let hook = ctx.hook();
        let id = id.get_value();
        spawn_local(async move {
            if hook.delete_todo(&id).await.is_ok() {
                store_prune_selection(&store);
            }
        });
    };

    view! {
        <div class=row_class>
            {deletable.then(|| view! {
                <input
                    type="checkbox"
                    class="select-box"
                    prop:checked=is_selected
                    on:change=move |_| store.selection().write().toggle(&id.read_value())
                />
            })}

            <div class="todo-body">
                <Show
                    when=move || editing.get()
                    fallback={
                        let title = todo.title.clone();
                        let description = todo.description.clone();
                        move || view! {
                            <span class="todo-title">{title.clone()}</span>
                            {description.clone().map(|d| view! { <p class="todo-description">{d}</p> })}
                        }
                    }
                >
                    <form class="todo-edit-form" on:submit=save_edit>
                        <input
                            type="text"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        />
                        <textarea
                            prop:value=move || edit_description.get()
                            on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                    </form>
                </Show>

                <div class="todo-badges">
                    <span class="badge category">{todo.category.as_str()}</span>
                    <span class=format!("badge priority-{}", todo.priority.as_str())>{todo.priority.as_str()}</span>
                    <span class=format!("badge status-{}", status.as_str())>{status.as_str()}</span>
                    {is_admin.then(|| todo.assigned_to.clone()).flatten().map(|a| view! {
                        <span class="badge assignee">{format!("→ {}", a)}</span>
                    })}
                    {due.map(|d| view! {
                        <span class="badge due">
                            {d.format("%Y-%m-%d").to_string()}
                            {move || (!completed).then(|| format!(" · {}", due_label(remaining_days(d, ctx.now.get()))))}
                        </span>
                    })}
                </div>

                {todo.completion_note.clone().map(|note| view! {
                    <p class="completion-note">"Note: " {note}</p>
                })}
            </div>

            <div class="todo-actions">
                {(!completed).then(|| view! {
                    <button class="status-btn" on:click=toggle_status>
                        {if status == TodoStatus::InProcess { "Pause" } else { "Start" }}
                    </button>
                    <button class="edit-btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                })}
                {(status == TodoStatus::InProcess).then(|| view! {
                    <button class="complete-btn" on:click=move |_| set_completing.set(Some(id.get_value()))>
                        "Complete"
                    </button>
                })}
                {deletable.then(|| view! {
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
                })}
            </div>
        </div>
    }
}
