//! Client Errors
//!
//! Every failure the data client or the state hook can surface. The
//! `Display` text is what the dashboard shows in its error slot.

use thiserror::Error;

use crate::domain::TodoStatus;

pub type ClientResult<T> = Result<T, ClientError>;

/// Shown for any transport failure, regardless of cause
pub const UNREACHABLE_MESSAGE: &str = "Unable to connect to the server. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The server could not be reached at all
    #[error("Unable to connect to the server. Please try again later.")]
    Unreachable,

    /// Non-2xx response; `message` comes from the body or falls back to `HTTP <status>`
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Login or registration was refused
    #[error("{0}")]
    Auth(String),

    /// A 2xx body that does not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// Rejected before sending
    #[error("{0}")]
    Validation(String),

    #[error("Cannot move a todo from {} to {}", .from.as_str(), .to.as_str())]
    InvalidTransition { from: TodoStatus, to: TodoStatus },
}

impl ClientError {
    /// Builds an application error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(*key)?.as_str().map(str::to_owned))
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));
        ClientError::Api { status, message }
    }

    /// Turns an application error into an auth refusal, keeping the message.
    pub fn into_auth(self) -> Self {
        match self {
            ClientError::Api { message, .. } => ClientError::Auth(message),
            other => other,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let err = ClientError::from_response(404, r#"{"message":"Todo not found"}"#);
        assert_eq!(err.to_string(), "Todo not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_field_fallback() {
        let err = ClientError::from_response(400, r#"{"error":"Title is required"}"#);
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_status_fallback_for_unparseable_body() {
        assert_eq!(ClientError::from_response(502, "<html>bad gateway</html>").to_string(), "HTTP 502");
        assert_eq!(ClientError::from_response(500, r#"{"message":""}"#).to_string(), "HTTP 500");
    }

    #[test]
    fn test_unreachable_is_fixed_text() {
        assert_eq!(ClientError::Unreachable.to_string(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_into_auth_keeps_message() {
        let err = ClientError::from_response(401, r#"{"message":"Invalid credentials"}"#).into_auth();
        assert_eq!(err, ClientError::Auth("Invalid credentials".into()));
        assert_eq!(ClientError::Unreachable.into_auth(), ClientError::Unreachable);
    }
}
