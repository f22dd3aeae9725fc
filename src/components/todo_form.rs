//! Todo Form Component
//!
//! Form for creating todos. Admins can hand the todo to another user.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::domain::{Category, NewTodo, Priority};

use crate::components::OptionSelector;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(Category::default());
    let (priority, set_priority) = signal(Priority::default());
    let (due_date, set_due_date) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());

    let is_admin = move || ctx.user.with(|u| u.as_ref().is_some_and(|u| u.is_admin()));

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let todo = NewTodo {
            title: title.get(),
            description: Some(description.get()),
            category: category.get(),
            priority: priority.get(),
            due_date: NaiveDate::parse_from_str(&due_date.get(), "%Y-%m-%d").ok(),
            assigned_to: if is_admin() { Some(assignee.get()) } else { None },
        };

        let hook = ctx.hook();
        spawn_local(async move {
            if hook.create_todo(todo).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
                set_due_date.set(String::new());
                set_assignee.set(String::new());
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=create_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || store.todos().read().loading>"Add"</button>
            </div>

            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />

            <div class="todo-form-row">
                <select
                    class="category-select"
                    on:change=move |ev| {
                        if let Some(c) = Category::parse(&event_target_value(&ev)) {
                            set_category.set(c);
                        }
                    }
                >
                    {Category::ALL.into_iter().map(|c| view! {
                        <option value=c.as_str() selected=move || category.get() == c>{c.as_str()}</option>
                    }).collect_view()}
                </select>

                <OptionSelector
                    options=&Priority::ALL
                    current=priority
                    label=Priority::as_str
                    on_change=move |p: Priority| set_priority.set(p)
                />

                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
            </div>

            <Show when=is_admin>
                <div class="todo-form-row">
                    <select
                        class="assignee-select"
                        prop:value=move || assignee.get()
                        on:change=move |ev| set_assignee.set(event_target_value(&ev))
                    >
                        <option value="">"Myself (personal)"</option>
                        {move || store.users().get().into_iter().map(|u| {
                            let label = format!("{} <{}>", u.name, u.email);
                            view! { <option value=u.email>{label}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </Show>
        </form>
    }
}
