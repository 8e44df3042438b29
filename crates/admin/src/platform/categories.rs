//! Thread and resource category operations.
//!
//! Two separate taxonomies live upstream: thread/blog categories under
//! `/api/admin/fetchCategory`, and resource categories (which carry an
//! approval flag) under the `resourceCategory` endpoints.

use serde::Serialize;
use tracing::instrument;

use gpdn_core::CategoryId;

use crate::models::{Category, ResourceCategory};

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
struct NewCategoryRequest<'a> {
    category: &'a str,
}

#[derive(Debug, Serialize)]
struct EditCategoryRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a CategoryId,
    category: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteCategoryRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a CategoryId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryApprovalRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a CategoryId,
    approval_status: bool,
}

impl PlatformClient {
    /// Fetch thread/blog categories.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, PlatformError> {
        let envelope: Envelope<Vec<Category>> = self.get("/api/admin/fetchCategory").await?;
        envelope.into_list()
    }

    /// Create a thread/blog category.
    #[instrument(skip(self))]
    pub async fn add_category(&self, category: &str) -> Result<(), PlatformError> {
        let body = NewCategoryRequest { category };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/addCategory", &body).await?;
        envelope.into_ack()
    }

    /// Fetch resource categories.
    #[instrument(skip(self))]
    pub async fn fetch_resource_categories(&self) -> Result<Vec<ResourceCategory>, PlatformError> {
        let envelope: Envelope<Vec<ResourceCategory>> =
            self.get("/api/admin/fetchresourceCategory").await?;
        envelope.into_list()
    }

    /// Create a resource category.
    #[instrument(skip(self))]
    pub async fn add_resource_category(&self, category: &str) -> Result<(), PlatformError> {
        let body = NewCategoryRequest { category };
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/admin/addresourceCategory", &body)
            .await?;
        envelope.into_ack()
    }

    /// Rename a resource category.
    #[instrument(skip(self))]
    pub async fn edit_resource_category(
        &self,
        id: &CategoryId,
        category: &str,
    ) -> Result<(), PlatformError> {
        let body = EditCategoryRequest { id, category };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/editresourceCategory", &body)
            .await?;
        envelope.into_ack()
    }

    /// Delete a resource category.
    #[instrument(skip(self))]
    pub async fn delete_resource_category(&self, id: &CategoryId) -> Result<(), PlatformError> {
        let body = DeleteCategoryRequest { id };
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/admin/deleteresourceCategory", &body)
            .await?;
        envelope.into_ack()
    }

    /// Flip a resource category's approval flag.
    #[instrument(skip(self))]
    pub async fn set_resource_category_approval(
        &self,
        id: &CategoryId,
        approval_status: bool,
    ) -> Result<(), PlatformError> {
        let body = CategoryApprovalRequest {
            id,
            approval_status,
        };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/resourceCategoryApproval", &body)
            .await?;
        envelope.into_ack()
    }
}
