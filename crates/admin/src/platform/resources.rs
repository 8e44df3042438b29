//! Clinical resource operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gpdn_core::ResourceId;

use crate::models::Resource;

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceApprovalRequest<'a> {
    resource_id: &'a ResourceId,
    action_status: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteResourceRequest<'a> {
    resource_id: &'a ResourceId,
}

/// JSON edit payload, used when no new files are attached. With new files
/// the edit goes through multipart instead (`existingFiles` as a JSON
/// string plus repeated `newFiles` parts).
#[derive(Debug, Serialize, Deserialize)]
pub struct EditResourceRequest {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<String>,
    pub files: Vec<String>,
}

impl PlatformClient {
    /// Fetch all resources.
    #[instrument(skip(self))]
    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, PlatformError> {
        let envelope: Envelope<Vec<Resource>> = self.get("/api/resource/fetchResource").await?;
        envelope.into_list()
    }

    /// Create a resource (multipart: `title`, `description`, `content`,
    /// `authorId`, `tags` as a JSON string, optional `category`, repeated
    /// `file` parts).
    #[instrument(skip(self, form))]
    pub async fn add_resource(&self, form: reqwest::multipart::Form) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.post_multipart("/api/resource/AddResource", form).await?;
        envelope.into_ack()
    }

    /// Edit a resource without attaching new files.
    #[instrument(skip(self, request))]
    pub async fn edit_resource(&self, request: &EditResourceRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/resource/EditResource", request)
            .await?;
        envelope.into_ack()
    }

    /// Edit a resource with new file attachments.
    #[instrument(skip(self, form))]
    pub async fn edit_resource_multipart(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .patch_multipart("/api/resource/EditResource", form)
            .await?;
        envelope.into_ack()
    }

    /// Flip a resource's approval flag.
    #[instrument(skip(self))]
    pub async fn set_resource_approval(
        &self,
        resource_id: &ResourceId,
        action_status: bool,
    ) -> Result<(), PlatformError> {
        let body = ResourceApprovalRequest {
            resource_id,
            action_status,
        };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/approveORdeclineResource", &body)
            .await?;
        envelope.into_ack()
    }

    /// Delete a resource.
    #[instrument(skip(self))]
    pub async fn delete_resource(&self, resource_id: &ResourceId) -> Result<(), PlatformError> {
        let body = DeleteResourceRequest { resource_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/resource/DeleteResource", &body).await?;
        envelope.into_ack()
    }
}
