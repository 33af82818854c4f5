//! Client Configuration

/// Backend base URL used when none is configured at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// localStorage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// localStorage key for the signed-in username
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to, without a trailing slash
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        let trimmed = api_base.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self {
            api_base: api_base.to_string(),
        }
    }

    /// Reads `TODO_API_BASE_URL` at compile time (trunk passes the build env through)
    pub fn from_env() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_API_BASE))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
