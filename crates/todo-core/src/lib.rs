//! Todo Dashboard Core
//!
//! Everything the dashboard does that is not rendering:
//! - domain: todo, user and stats records
//! - client: HTTP data client over the todo REST API
//! - hook: the session's todo list and stats, kept in step with the server
//! - view: tab visibility, filters, due dates and derived stats
//! - selection: bulk-delete selection

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod hook;
pub mod selection;
pub mod session;
pub mod view;

pub use client::{ApiClient, TodoApi, TodoFilters};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use hook::{StateCell, TodoHook, TodoState};
pub use selection::Selection;
pub use session::{MemoryStorage, ProfileRefresh, Session, SessionStorage};
