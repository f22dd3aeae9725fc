//! Client Configuration

/// Hosted backend used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://todo-backend-95t0.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `TODO_API_BASE_URL` captured at build time, else the hosted backend.
    ///
    /// A wasm bundle has no process environment, so the value is read by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:4000/");
        assert_eq!(config.url("/api/todos"), "http://localhost:4000/api/todos");
    }
}
