//! Todo API Seam
//!
//! The operations the state hook needs from a backend. `ApiClient`
//! implements it over HTTP; tests substitute an in-memory server.

use async_trait::async_trait;

use super::TodoFilters;
use crate::domain::{BulkDeleteResult, NewTodo, Todo, TodoPage, TodoPatch, TodoStats};
use crate::error::ClientResult;

#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_todos(&self, filters: &TodoFilters) -> ClientResult<TodoPage>;

    async fn create_todo(&self, todo: &NewTodo) -> ClientResult<Todo>;

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> ClientResult<Todo>;

    async fn delete_todo(&self, id: &str) -> ClientResult<()>;

    /// Marks completed; the server stamps the completion time
    async fn complete_todo(&self, id: &str, note: Option<&str>) -> ClientResult<Todo>;

    async fn bulk_delete_todos(&self, ids: &[String]) -> ClientResult<BulkDeleteResult>;

    async fn stats(&self) -> ClientResult<TodoStats>;
}
