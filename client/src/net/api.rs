//! Outbound HTTP to the remote article feed.
//!
//! Client-side (hydrate): a single `GET` via `gloo-net`.
//! Server-side (SSR) and native builds: `FetchError::Unavailable`, since the
//! feed is only loaded after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `FetchError` so the caller can log them and leave
//! the article list as it is. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::parse_feed;
use crate::state::articles::Article;

/// Public placeholder source for the initial feed.
pub const FEED_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Why the feed could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("feed request failed: {0}")]
    Transport(String),
    #[error("feed request failed: status {0}")]
    Status(u16),
    #[error("feed payload malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("feed not available outside the browser")]
    Unavailable,
}

/// Fetch the first `FEED_LIMIT` articles from `FEED_ENDPOINT`.
///
/// # Errors
///
/// Returns a `FetchError` on transport failure, a non-2xx status, or a
/// payload that is not a JSON array of posts.
pub async fn fetch_feed() -> Result<Vec<Article>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(FEED_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let raw = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(parse_feed(&raw)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unavailable)
    }
}
