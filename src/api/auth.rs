//! Auth Calls
//!
//! `/auth/login` and `/auth/register`.

use super::{decode, HttpClient};
use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

pub async fn login(http: &HttpClient, args: &LoginRequest<'_>) -> ApiResult<AuthResponse> {
    let response = http.post("/auth/login", args).await?;
    decode(&response)
}

pub async fn register(http: &HttpClient, args: &RegisterRequest<'_>) -> ApiResult<AuthResponse> {
    let response = http.post("/auth/register", args).await?;
    decode(&response)
}
