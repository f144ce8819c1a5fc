//! REST API Client
//!
//! Thin fetch wrappers over the whisky tracker backend, organized by domain.
//! Every call goes through [`send`], which attaches the bearer token and
//! turns error statuses into [`ApiError`].

mod auth;
mod bottle;
mod distillery;
mod profile;
mod wishlist;

use std::fmt;
use std::sync::OnceLock;

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use whisky_core::{error, ApiConfig, ApiError};

use crate::session;

// Re-export all public items
pub use auth::*;
pub use bottle::*;
pub use distillery::*;
pub use profile::*;
pub use wishlist::*;

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Install the API configuration. Call once before mounting.
pub fn init(config: ApiConfig) {
    log::info!("[API] Base URL: {}", config.base_url());
    if CONFIG.set(config).is_err() {
        log::warn!("[API] Configuration already installed, keeping the first one");
    }
}

fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::from_env)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

/// Send a request and decode its JSON body.
///
/// 401 clears the stored token and sends the browser to `/login`, except on
/// `/auth/*` where it is a credential failure and returns as `ApiError::Http`.
/// 204 decodes as JSON `null`, so `()` and `Option<T>` targets both work.
async fn send<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let url = config().url(path);
    log::debug!("[API] {} {}", method, path);

    let mut request = builder(method, &url).header("Content-Type", "application/json");
    if let Some(token) = session::token() {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => request.body(json),
        None => request.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        log::error!("[API] {} {} failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    if error::ends_session(status, path) {
        log::warn!("[API] {} {} unauthorized, clearing session", method, path);
        session::clear_token();
        redirect_to_login();
        return Err(ApiError::Unauthorized);
    }
    if status == 204 {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let err = ApiError::from_response(status, &text);
        log::warn!("[API] {} {} -> {}: {}", method, path, status, err);
        return Err(err);
    }

    serde_json::from_str(&text).map_err(|e| {
        log::error!("[API] {} {} returned unexpected JSON: {}", method, path, e);
        ApiError::Decode(e.to_string())
    })
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn redirect_to_login() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href("/login") {
        log::error!("[API] Redirect to login failed: {:?}", e);
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send(Method::Get, path, None).await
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send(Method::Post, path, Some(encode(body)?)).await
}

async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send(Method::Put, path, Some(encode(body)?)).await
}

async fn delete(path: &str) -> Result<(), ApiError> {
    send(Method::Delete, path, None).await
}
