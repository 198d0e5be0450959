//! Reactive subscription over a JSON endpoint.
//!
//! DESIGN
//! ======
//! Components see a three-state value: not loaded yet, loaded, or failed.
//! A response is only reported for the path that is currently requested, so
//! changing the path falls back to `NotLoaded` until the new response lands.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::api::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    NotLoaded,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotLoaded
    }
}

impl<T> FetchState<T> {
    /// State for `requested` given the most recent `(path, result)` response.
    pub fn settle(requested: &str, response: Option<(String, Result<T, FetchError>)>) -> Self {
        match response {
            Some((path, Ok(data))) if path == requested => Self::Loaded(data),
            Some((path, Err(e))) if path == requested => Self::Failed(e),
            _ => Self::NotLoaded,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            Self::NotLoaded | Self::Failed(_) => None,
        }
    }
}

/// Subscribe to the JSON document at `path`, re-fetching whenever it changes.
///
/// Outside the browser this stays `NotLoaded`, which keeps server-rendered
/// markup identical to the browser's first render.
pub fn use_data<T>(path: Signal<String>) -> Signal<FetchState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let resource = LocalResource::new(move || {
            let path = path.get();
            async move {
                let result = super::api::fetch_json::<T>(&path).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("GET {path} failed: {e}");
                }
                (path, result)
            }
        });
        Signal::derive(move || FetchState::settle(&path.get(), resource.get()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Signal::stored(FetchState::NotLoaded)
    }
}
