//! REST API helpers for communicating with the data browser backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `FetchError::Unavailable`, since saved views are only
//! loaded in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `FetchError` instead of panics so a failed request
//! degrades to an empty section rather than breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Saved-view list endpoint under `base_url` (which ends with `/`).
#[must_use]
pub fn saved_views_endpoint(base_url: &str) -> String {
    format!("{base_url}api/views/")
}

/// GET `path` and decode the JSON body as `T`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request cannot be sent, the server
/// responds with a non-OK status, or the body does not decode as `T`.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(FetchError::Unavailable)
    }
}
