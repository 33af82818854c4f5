//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the backend: the credential is missing or expired
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx status, with the body's `message` when present
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message: Some(m), .. } if !m.is_empty() => Some(m),
            _ => None,
        }
    }
}
