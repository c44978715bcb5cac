//! HTTP plumbing for the REST backend.
//!
//! Every endpoint is same-origin under `/api`. Helpers attach the stored
//! bearer token, surface the server's `{message}` field verbatim on
//! non-2xx responses, and end the session on a 401.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

pub const API_BASE: &str = "/api";

pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Verb for a form submission: POST creates, PUT updates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

/// Pick verb and path for submitting a form: no id means create (POST to
/// the collection), an id means update (PUT to the member). Paths are
/// relative to [`API_BASE`].
pub fn write_endpoint(resource: &str, id: Option<i64>) -> (WriteMethod, String) {
    match id {
        Some(id) => (WriteMethod::Put, format!("/{resource}/{id}")),
        None => (WriteMethod::Post, format!("/{resource}")),
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::bearer_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

/// GET a JSON collection or object.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit a JSON body with the verb picked by [`write_endpoint`].
pub async fn send_json<B: Serialize>(
    method: WriteMethod,
    path: &str,
    body: &B,
) -> Result<(), String> {
    let url = api_url(path);
    let builder = match method {
        WriteMethod::Post => Request::post(&url),
        WriteMethod::Put => Request::put(&url),
    };

    let response = with_auth(builder)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure(response).await);
    }

    Ok(())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure(response).await);
    }

    Ok(())
}

/// Turn a non-2xx response into the user-facing error string. A 401 drops
/// the stored session and reloads, which lands the user on the login page.
async fn failure(response: Response) -> String {
    if response.status() == 401 {
        storage::clear_session();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
        return "Session expired".to_string();
    }
    response_message(response).await
}

/// The server's `{message}` field verbatim, or a generic status string.
pub(crate) async fn response_message(response: Response) -> String {
    let status = response.status();
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP {}", status)),
        Err(_) => format!("HTTP {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_posts_to_the_collection() {
        let (method, path) = write_endpoint("products", None);
        assert_eq!(method, WriteMethod::Post);
        assert_eq!(api_url(&path), "/api/products");
    }

    #[test]
    fn update_puts_to_the_member() {
        let (method, path) = write_endpoint("products", Some(5));
        assert_eq!(method, WriteMethod::Put);
        assert_eq!(api_url(&path), "/api/products/5");
    }
}
