use contracts::auth::{AuthResponse, LoginRequest, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api::{api_url, response_message};

/// Log in with username and password.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&api_url("/login"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_message(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an account; the server logs the new user straight in.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&api_url("/register"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(response_message(response).await);
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
