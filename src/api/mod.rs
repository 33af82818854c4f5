//! Backend API Bindings
//!
//! HTTP calls against the todo backend, organized by domain.
//! `HttpClient` owns the bearer credential; every request built through it
//! carries whatever token is attached at that moment.

mod auth;
mod tasks;
mod transport;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

pub use auth::*;
pub use tasks::*;
pub use transport::{GlooTransport, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outgoing request, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Raw response: status plus the body text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Base URL + transport + the attached credential
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    credential: Rc<RefCell<Option<String>>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            credential: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach (`Some`) or detach (`None`) the bearer token
    pub fn set_auth_token(&self, token: Option<&str>) {
        *self.credential.borrow_mut() = token.map(str::to_string);
    }

    pub fn auth_token(&self) -> Option<String> {
        self.credential.borrow().clone()
    }

    fn request(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> ApiRequest {
        ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.auth_token(),
            body,
        }
    }

    /// Send and map the status: 401 → `Unauthorized`, other non-2xx → `Rejected`
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        tracing::debug!("{:?} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        if response.status == 401 {
            return Err(ApiError::Unauthorized);
        }
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.message);
        Err(ApiError::Rejected {
            status: response.status,
            message,
        })
    }

    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(self.request(Method::Get, path, None)).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        let body = encode(body)?;
        self.send(self.request(Method::Post, path, Some(body))).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> ApiResult<ApiResponse> {
        let body = body.map(encode).transpose()?;
        self.send(self.request(Method::Put, path, body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(self.request(Method::Delete, path, None)).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a JSON success body
pub(crate) fn decode<T: serde::de::DeserializeOwned>(response: &ApiResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
