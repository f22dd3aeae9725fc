//! Filter Bar Component
//!
//! Status and category filters. Changing either re-fetches the list with
//! the filters applied on the server.

use leptos::prelude::*;
use todo_core::domain::{Category, TodoStatus};

use crate::context::use_app_context;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();

    // Users' tabs already split by status
    let is_admin = move || ctx.user.with(|u| u.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <div class="filter-bar">
            <Show when=is_admin>
                <select
                    class="status-filter"
                    on:change=move |ev| {
                        let status = TodoStatus::parse(&event_target_value(&ev));
                        ctx.filters.update(|f| f.status = status);
                    }
                >
                    <option value="" selected=move || ctx.filters.with(|f| f.status.is_none())>"All statuses"</option>
                    {TodoStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str() selected=move || ctx.filters.with(|f| f.status == Some(s))>
                            {s.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </Show>

            <select
                class="category-filter"
                on:change=move |ev| {
                    let category = Category::parse(&event_target_value(&ev));
                    ctx.filters.update(|f| f.category = category);
                }
            >
                <option value="" selected=move || ctx.filters.with(|f| f.category.is_none())>"All categories"</option>
                {Category::ALL.into_iter().map(|c| view! {
                    <option value=c.as_str() selected=move || ctx.filters.with(|f| f.category == Some(c))>
                        {c.as_str()}
                    </option>
                }).collect_view()}
            </select>

            <label class="overdue-filter">
                <input
                    type="checkbox"
                    prop:checked=move || ctx.filters.with(|f| f.overdue == Some(true))
                    on:change=move |ev| {
                        let overdue = event_target_checked(&ev).then_some(true);
                        ctx.filters.update(|f| f.overdue = overdue);
                    }
                />
                "Overdue only"
            </label>
        </div>
    }
}
