//! Analytics Component
//!
//! Summary cards and category/priority bars over the loaded todos.

use leptos::prelude::*;
use todo_core::domain::{Category, Priority, TodoStats};
use todo_core::view::{derive_stats, is_visible_to, percentage};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn StatCard(label: &'static str, value: usize, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class)>
            <h3>{label}</h3>
            <p class="stat-value">{value}</p>
        </div>
    }
}

#[component]
fn Bar(label: &'static str, count: usize, total: usize) -> impl IntoView {
    let width = format!("width: {:.0}%;", percentage(count, total));
    view! {
        <div class="bar-row">
            <span class="bar-label">{label}</span>
            <div class="bar-track">
                <div class="bar-fill" style=width />
            </div>
            <span class="bar-count">{count}</span>
        </div>
    }
}

#[component]
pub fn Analytics() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let stats = Memo::new(move |_| {
        let now = ctx.now.get();
        ctx.user.with(|user| {
            user.as_ref()
                .map(|user| store.todos().with(|s| derive_stats(&s.todos, user, now)))
                .unwrap_or_default()
        })
    });

    // (mine, assigned to others), admins only
    let split = move || {
        ctx.user.with(|user| {
            user.as_ref().filter(|u| u.is_admin()).map(|admin| {
                store.todos().with(|s| {
                    let mine = s.todos.iter().filter(|t| is_visible_to(admin, t)).count();
                    (mine, s.todos.len() - mine)
                })
            })
        })
    };

    let server_total = move || store.todos().with(|s| s.stats.as_ref().map(|st| st.total));

    let cards = move || {
        let s: TodoStats = stats.get();
        view! {
            <div class="stat-cards">
                <StatCard label="Total" value=s.total class="total" />
                <StatCard label="Completed" value=s.completed class="completed" />
                <StatCard label="Pending" value=s.pending class="pending" />
                <StatCard label="In Progress" value=s.in_process class="in-process" />
                <StatCard label="Overdue" value=s.overdue class="overdue" />
            </div>
            <div class="bar-groups">
                <section class="bar-group">
                    <h3>"By category"</h3>
                    {Category::ALL.into_iter().map(|c| view! {
                        <Bar label=c.as_str() count=s.category_count(c) total=s.total />
                    }).collect_view()}
                </section>
                <section class="bar-group">
                    <h3>"By priority"</h3>
                    {Priority::ALL.into_iter().map(|p| view! {
                        <Bar label=p.as_str() count=s.priority_count(p) total=s.total />
                    }).collect_view()}
                </section>
            </div>
        }
    };

    view! {
        <div class="analytics">
            {cards}
            {move || split().map(|(mine, others)| view! {
                <div class="stat-cards">
                    <StatCard label="My todos" value=mine class="mine" />
                    <StatCard label="Assigned to others" value=others class="assigned" />
                </div>
            })}
            {move || server_total().map(|total| view! {
                <p class="server-total">{format!("{} todos on the server", total)}</p>
            })}
        </div>
    }
}
