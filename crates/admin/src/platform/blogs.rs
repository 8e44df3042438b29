//! News & blog operations.

use serde::Serialize;
use tracing::instrument;

use gpdn_core::BlogId;

use crate::models::{Blog, Category};

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteBlogRequest<'a> {
    /// Upstream spells this `BlogId`, capitalized.
    #[serde(rename = "BlogId")]
    blog_id: &'a BlogId,
}

impl PlatformClient {
    /// Fetch all news posts and blogs.
    #[instrument(skip(self))]
    pub async fn fetch_blogs(&self) -> Result<Vec<Blog>, PlatformError> {
        let envelope: Envelope<Vec<Blog>> = self.get("/api/blog/fetchNewsAndBlogs").await?;
        envelope.into_list()
    }

    /// Fetch the categories a post can be filed under.
    #[instrument(skip(self))]
    pub async fn fetch_blog_categories(&self) -> Result<Vec<Category>, PlatformError> {
        let envelope: Envelope<Vec<Category>> = self.get("/api/blog/fetchCategory").await?;
        envelope.into_list()
    }

    /// Create a blog post (multipart: `title`, `content`, `description`,
    /// `authorId`, `category`, `tags` as a JSON string, optional `file`).
    #[instrument(skip(self, form))]
    pub async fn add_blog(&self, form: reqwest::multipart::Form) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_multipart("/api/blog/AddNewsAndBlogs", form)
            .await?;
        envelope.into_ack()
    }

    /// Edit a blog post (multipart, same fields as create plus `_id`).
    #[instrument(skip(self, form))]
    pub async fn edit_blog(&self, form: reqwest::multipart::Form) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .patch_multipart("/api/blog/EditNewsAndBlogs", form)
            .await?;
        envelope.into_ack()
    }

    /// Delete a blog post.
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, blog_id: &BlogId) -> Result<(), PlatformError> {
        let body = DeleteBlogRequest { blog_id };
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/blog/DeleteNewsAndBlogs", &body)
            .await?;
        envelope.into_ack()
    }
}
