//! HTTP Data Client
//!
//! Typed wrappers over the todo REST API. Every request carries the
//! session's bearer token when one is present; failures are normalized
//! into `ClientError`.

mod api;
mod query;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::domain::{AuthResponse, BulkDeleteResult, NewTodo, Todo, TodoPage, TodoPatch, TodoStats, User};
use crate::error::{ClientError, ClientResult};
use crate::session::Session;

pub use api::TodoApi;
pub use query::TodoFilters;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CompleteArgs<'a> {
    #[serde(rename = "completionNote", skip_serializing_if = "Option::is_none")]
    completion_note: Option<&'a str>,
}

#[derive(Serialize)]
struct BulkDeleteArgs<'a> {
    #[serde(rename = "todoIds")]
    todo_ids: &'a [String],
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn builder(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.config.url(endpoint))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn execute(&self, method: Method, endpoint: &str, request: RequestBuilder) -> ClientResult<String> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(%method, endpoint, error = %e, "Network error");
            ClientError::Unreachable
        })?;

        let status = response.status();
        tracing::debug!(%method, endpoint, status = status.as_u16(), "API request");

        let body = response.text().await.map_err(|e| {
            tracing::error!(%method, endpoint, error = %e, "Failed to read response body");
            ClientError::Unreachable
        })?;

        if !status.is_success() {
            let err = ClientError::from_response(status.as_u16(), &body);
            tracing::warn!(%method, endpoint, status = status.as_u16(), error = %err, "API error");
            return Err(err);
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, endpoint: &str) -> ClientResult<T> {
        let request = self.builder(method.clone(), endpoint);
        let body = self.execute(method, endpoint, request).await?;
        decode(endpoint, &body)
    }

    async fn send<B, T>(&self, method: Method, endpoint: &str, payload: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.builder(method.clone(), endpoint).json(payload);
        let body = self.execute(method, endpoint, request).await?;
        decode(endpoint, &body)
    }

    // ========================
    // Authentication
    // ========================

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self
            .send(Method::POST, "/api/auth/login", &LoginArgs { email, password })
            .await
            .map_err(ClientError::into_auth)?;
        self.session.persist(&auth);
        tracing::info!(email = %auth.user.email, "Signed in");
        Ok(auth)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let auth: AuthResponse = self
            .send(Method::POST, "/api/auth/register", &RegisterArgs { name, email, password })
            .await
            .map_err(ClientError::into_auth)?;
        self.session.persist(&auth);
        tracing::info!(email = %auth.user.email, "Registered");
        Ok(auth)
    }

    /// Clears the local session unconditionally; the remote call is best-effort.
    pub async fn logout(&self) -> ClientResult<()> {
        let endpoint = "/api/auth/logout";
        let request = self.builder(Method::POST, endpoint);
        let result = self.execute(Method::POST, endpoint, request).await.map(|_| ());
        self.session.clear();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Remote logout failed; local session cleared anyway");
        }
        result
    }

    pub async fn current_user(&self) -> ClientResult<User> {
        self.fetch(Method::GET, "/api/auth/me").await
    }

    pub async fn all_users(&self) -> ClientResult<Vec<User>> {
        self.fetch(Method::GET, "/api/auth/users").await
    }
}

// ========================
// Todo Operations
// ========================

#[async_trait(?Send)]
impl TodoApi for ApiClient {
    async fn list_todos(&self, filters: &TodoFilters) -> ClientResult<TodoPage> {
        self.fetch(Method::GET, &query::todos_path(filters)).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> ClientResult<Todo> {
        let todo = todo.clone().validate()?;
        self.send(Method::POST, "/api/todos", &todo).await
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> ClientResult<Todo> {
        self.send(Method::PUT, &query::todo_path(id), patch).await
    }

    async fn delete_todo(&self, id: &str) -> ClientResult<()> {
        let endpoint = query::todo_path(id);
        let request = self.builder(Method::DELETE, &endpoint);
        self.execute(Method::DELETE, &endpoint, request).await.map(|_| ())
    }

    async fn complete_todo(&self, id: &str, note: Option<&str>) -> ClientResult<Todo> {
        let args = CompleteArgs { completion_note: note };
        self.send(Method::PATCH, &query::complete_path(id), &args).await
    }

    async fn bulk_delete_todos(&self, ids: &[String]) -> ClientResult<BulkDeleteResult> {
        if ids.is_empty() {
            return Err(ClientError::Validation("no todos selected".into()));
        }
        self.send(Method::DELETE, "/api/todos/bulk", &BulkDeleteArgs { todo_ids: ids })
            .await
    }

    async fn stats(&self) -> ClientResult<TodoStats> {
        self.fetch(Method::GET, "/api/todos/stats").await
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(endpoint, error = %e, "Malformed response body");
        ClientError::Decode(e.to_string())
    })
}
