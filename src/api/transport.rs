//! Transport
//!
//! A single request/response exchange. The browser build uses `fetch`
//! through gloo; tests swap in a scripted transport.

use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};

use super::{ApiRequest, ApiResponse, Method};
use crate::error::{ApiError, ApiResult};

#[async_trait(?Send)]
pub trait Transport {
    /// Perform the exchange. Only transport-level failures are errors;
    /// any HTTP status is returned as a response.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let built = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("failed to read response body: {}", e);
                String::new()
            }
        };
        Ok(ApiResponse { status, body })
    }
}
