//! REST API Client
//!
//! Thin wrappers over the backend HTTP API, organized by domain. Every
//! request carries the stored bearer token when one exists.

mod auth;
mod todos;

pub use auth::*;
pub use todos::*;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::storage;

/// Backend base URL
const API_BASE: &str = "http://localhost:5001/api";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn request(method: Method, path: &str) -> reqwest::RequestBuilder {
    let client = reqwest::Client::new();
    let mut builder = client.request(method, format!("{}{}", API_BASE, path));
    if let Some(token) = storage::get_token() {
        builder = builder.bearer_auth(token);
    }
    builder
}

/// Send the request and decode the JSON body. On a rejected request, prefer
/// the server-supplied error field, falling back to the given message.
async fn execute<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
    fallback: &str,
) -> Result<T, String> {
    let response = builder.send().await.map_err(|_| fallback.to_string())?;

    if response.status().is_success() {
        response.json::<T>().await.map_err(|e| e.to_string())
    } else {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error.or(body.message));
        Err(message.unwrap_or_else(|| fallback.to_string()))
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, String> {
    execute(request(Method::GET, path), fallback).await
}

pub(crate) async fn send_json<T: DeserializeOwned, B: serde::Serialize>(
    method: Method,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    execute(request(method, path).json(body), fallback).await
}

pub(crate) async fn delete(path: &str, fallback: &str) -> Result<(), String> {
    execute::<serde_json::Value>(request(Method::DELETE, path), fallback)
        .await
        .map(|_| ())
}
