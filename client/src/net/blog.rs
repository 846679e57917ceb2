//! Public blog endpoints.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{Page, PostCard, PostPayload, TagsPayload};
use crate::util::query::Query;

pub const POSTS_PAGE_SIZE: u32 = 9;

/// Blog list filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub page: u32,
    pub q: String,
    pub tag: String,
}

impl PostFilter {
    pub fn path(&self) -> String {
        Query::new()
            .with("page", self.page.max(1))
            .with("page_size", POSTS_PAGE_SIZE)
            .with_nonempty("q", &self.q)
            .with_nonempty("tag", &self.tag)
            .append_to("/api/blog/posts/")
    }
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_tags<T: Transport>(api: &ApiClient<T>) -> Result<TagsPayload, ApiError> {
    api.get("/api/blog/tags/").await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_posts<T: Transport>(api: &ApiClient<T>, filter: &PostFilter) -> Result<Page<PostCard>, ApiError> {
    api.get(&filter.path()).await
}

/// # Errors
///
/// Returns the API error, e.g. `HTTP 404` for an unknown slug.
pub async fn fetch_post<T: Transport>(api: &ApiClient<T>, slug: &str) -> Result<PostPayload, ApiError> {
    api.get(&format!("/api/blog/posts/{}/", urlencoding::encode(slug)))
        .await
}
