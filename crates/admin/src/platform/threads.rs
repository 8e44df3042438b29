//! Forum thread operations.

use serde::Serialize;
use tracing::instrument;

use gpdn_core::ThreadId;

use crate::models::Thread;

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreadApprovalRequest<'a> {
    thread_id: &'a ThreadId,
    approval_status: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteThreadRequest<'a> {
    thread_id: &'a ThreadId,
}

impl PlatformClient {
    /// Fetch all discussion threads.
    #[instrument(skip(self))]
    pub async fn fetch_threads(&self) -> Result<Vec<Thread>, PlatformError> {
        let envelope: Envelope<Vec<Thread>> = self.get("/api/thread/FetchThread").await?;
        envelope.into_list()
    }

    /// Edit a thread (multipart: `_id`, `title`, `content`, `tags` as a JSON
    /// string, optional `file` for the thumbnail).
    #[instrument(skip(self, form))]
    pub async fn edit_thread(&self, form: reqwest::multipart::Form) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.patch_multipart("/api/thread/EditThread", form).await?;
        envelope.into_ack()
    }

    /// Flip a thread's approval flag.
    #[instrument(skip(self))]
    pub async fn set_thread_approval(
        &self,
        thread_id: &ThreadId,
        approval_status: bool,
    ) -> Result<(), PlatformError> {
        let body = ThreadApprovalRequest {
            thread_id,
            approval_status,
        };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/approveORdeclineThreads", &body)
            .await?;
        envelope.into_ack()
    }

    /// Delete a thread.
    #[instrument(skip(self))]
    pub async fn delete_thread(&self, thread_id: &ThreadId) -> Result<(), PlatformError> {
        let body = DeleteThreadRequest { thread_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/thread/DeleteThread", &body).await?;
        envelope.into_ack()
    }
}
