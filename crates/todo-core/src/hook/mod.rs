//! Todo State Hook
//!
//! Owns the client-side copy of the todo list and stats for the session.
//! Local state only changes after the server acknowledges a mutation, so
//! a failed call leaves the list exactly as it was.


use std::cell::RefCell;

use crate::client::{TodoApi, TodoFilters};
use crate::domain::{BulkDeleteResult, NewTodo, Todo, TodoPatch, TodoStats, TodoStatus};
use crate::error::{ClientError, ClientResult};

/// Snapshot of everything the dashboard renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub stats: Option<TodoStats>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodoState {
    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn replace(&mut self, updated: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }
}

/// Where the hook keeps its state.
///
/// The UI backs this with a reactive store; tests use a `RefCell`.
pub trait StateCell {
    fn update(&self, f: impl FnOnce(&mut TodoState));

    fn snapshot(&self) -> TodoState;
}

impl StateCell for RefCell<TodoState> {
    fn update(&self, f: impl FnOnce(&mut TodoState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> TodoState {
        self.borrow().clone()
    }
}

/// Clears the loading flag however the fetch ends, including when the
/// future is dropped before completing.
struct LoadingGuard<'a, C: StateCell> {
    state: &'a C,
}

impl<'a, C: StateCell> LoadingGuard<'a, C> {
    fn start(state: &'a C) -> Self {
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        Self { state }
    }
}

impl<C: StateCell> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        self.state.update(|s| s.loading = false);
    }
}

#[derive(Debug, Clone)]
pub struct TodoHook<A, C> {
    api: A,
    state: C,
}

impl<A: TodoApi, C: StateCell> TodoHook<A, C> {
    pub fn new(api: A, state: C) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial load: the unfiltered list and the stats.
    pub async fn load(&self) {
        self.fetch_todos(&TodoFilters::default()).await;
        self.fetch_stats().await;
    }

    /// Replaces the list with the server's result. Failures land in the
    /// error slot and keep the previous list.
    pub async fn fetch_todos(&self, filters: &TodoFilters) {
        let _loading = LoadingGuard::start(&self.state);
        match self.api.list_todos(filters).await {
            Ok(page) => {
                tracing::debug!(count = page.todos.len(), total = page.total, "Fetched todos");
                self.state.update(|s| s.todos = page.todos);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch todos");
                self.state.update(|s| s.error = Some(e.to_string()));
            }
        }
    }

    /// Stats are supplementary: failures are logged, never surfaced.
    pub async fn fetch_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => self.state.update(|s| s.stats = Some(stats)),
            Err(e) => tracing::warn!(error = %e, "Failed to fetch stats"),
        }
    }

    pub async fn create_todo(&self, todo: NewTodo) -> ClientResult<Todo> {
        self.begin();
        let result = async {
            let todo = todo.validate()?;
            self.api.create_todo(&todo).await
        }
        .await;
        let created = self.settle(result)?;
        tracing::info!(id = %created.id, "Created todo");
        self.state.update(|s| s.todos.insert(0, created.clone()));
        self.fetch_stats().await;
        Ok(created)
    }

    /// Sends a partial update and adopts the server's copy of the todo.
    pub async fn update_todo(&self, id: &str, patch: TodoPatch) -> ClientResult<Todo> {
        self.begin();
        let result = async {
            if let Some(next) = patch.status {
                if next == TodoStatus::Completed {
                    return Err(self.transition_error(id, next));
                }
                self.check_transition(id, next)?;
            }
            self.api.update_todo(id, &patch).await
        }
        .await;
        let updated = self.settle(result)?;
        self.state.update(|s| s.replace(updated.clone()));
        self.fetch_stats().await;
        Ok(updated)
    }

    /// Start or pause. Completion goes through `complete_todo`.
    pub async fn set_status(&self, id: &str, status: TodoStatus) -> ClientResult<Todo> {
        self.update_todo(id, TodoPatch::status(status)).await
    }

    pub async fn delete_todo(&self, id: &str) -> ClientResult<()> {
        self.begin();
        let result = self.api.delete_todo(id).await;
        self.settle(result)?;
        tracing::info!(id, "Deleted todo");
        self.state.update(|s| s.todos.retain(|t| t.id != id));
        self.fetch_stats().await;
        Ok(())
    }

    pub async fn complete_todo(&self, id: &str, note: Option<String>) -> ClientResult<Todo> {
        self.begin();
        let note = note.filter(|n| !n.trim().is_empty());
        let result = async {
            self.check_transition(id, TodoStatus::Completed)?;
            self.api.complete_todo(id, note.as_deref()).await
        }
        .await;
        let completed = self.settle(result)?;
        tracing::info!(id, "Completed todo");
        self.state.update(|s| s.replace(completed.clone()));
        self.fetch_stats().await;
        Ok(completed)
    }

    /// Removes exactly `ids` from the list once the batch is confirmed.
    pub async fn bulk_delete_todos(&self, ids: &[String]) -> ClientResult<BulkDeleteResult> {
        self.begin();
        let result = self.api.bulk_delete_todos(ids).await;
        let outcome = self.settle(result)?;
        tracing::info!(requested = ids.len(), deleted = outcome.deleted_count, "Bulk deleted todos");
        self.state.update(|s| s.todos.retain(|t| !ids.contains(&t.id)));
        self.fetch_stats().await;
        Ok(outcome)
    }

    fn begin(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Records a failure in the error slot and hands it back to the caller.
    fn settle<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        result.inspect_err(|e| {
            tracing::warn!(error = %e, "Todo mutation failed");
            let message = e.to_string();
            self.state.update(|s| s.error = Some(message));
        })
    }

    /// Checks the lifecycle against the locally known status. Unknown ids
    /// are left for the server to judge.
    fn check_transition(&self, id: &str, next: TodoStatus) -> ClientResult<()> {
        let current = self.state.snapshot().find(id).map(|t| t.status);
        match current {
            Some(from) if !from.can_transition_to(next) => Err(ClientError::InvalidTransition { from, to: next }),
            _ => Ok(()),
        }
    }

    fn transition_error(&self, id: &str, to: TodoStatus) -> ClientError {
        let from = self.state.snapshot().find(id).map(|t| t.status).unwrap_or_default();
        ClientError::InvalidTransition { from, to }
    }
}
