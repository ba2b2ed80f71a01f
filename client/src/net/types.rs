//! Wire types for the remote article feed.
//!
//! DESIGN
//! ======
//! The placeholder source returns `{id, title, body, userId}` records; only
//! the first three fields are kept. Unknown fields are ignored so upstream
//! additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::state::articles::Article;

/// Number of remote records kept on startup.
pub const FEED_LIMIT: usize = 9;

/// One record as served by the remote feed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RemotePost {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
}

impl From<RemotePost> for Article {
    fn from(post: RemotePost) -> Self {
        Self { id: post.id, title: post.title, body: post.body }
    }
}

/// Decode a feed payload and keep the first `FEED_LIMIT` records.
///
/// # Errors
///
/// Returns the decode error when `raw` is not a JSON array of posts.
pub fn parse_feed(raw: &str) -> Result<Vec<Article>, serde_json::Error> {
    let posts: Vec<RemotePost> = serde_json::from_str(raw)?;
    Ok(posts.into_iter().take(FEED_LIMIT).map(Article::from).collect())
}
