//! Member (platform user) operations.

use serde::Serialize;
use tracing::instrument;

use gpdn_core::{MemberId, RegistrationStatus};

use crate::models::Member;

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MemberApprovalRequest<'a> {
    user_id: &'a MemberId,
    action_status: RegistrationStatus,
}

#[derive(Debug, Serialize)]
struct DeleteMemberRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a MemberId,
}

#[derive(Debug, Serialize)]
struct InvitationRequest<'a> {
    number: &'a str,
}

impl PlatformClient {
    /// Fetch all registered members.
    #[instrument(skip(self))]
    pub async fn fetch_members(&self) -> Result<Vec<Member>, PlatformError> {
        let envelope: Envelope<Vec<Member>> = self.get("/api/admin/fetchUser").await?;
        envelope.into_list()
    }

    /// Register a member on their behalf (multipart: profile fields plus an
    /// optional `file` part for the profile image).
    #[instrument(skip(self, form))]
    pub async fn register_member(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.post_multipart("/api/user/Register", form).await?;
        envelope.into_ack()
    }

    /// Approve or decline a member registration.
    #[instrument(skip(self))]
    pub async fn set_member_status(
        &self,
        user_id: &MemberId,
        action_status: RegistrationStatus,
    ) -> Result<(), PlatformError> {
        let body = MemberApprovalRequest {
            user_id,
            action_status,
        };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/approveORdeclineUser", &body)
            .await?;
        envelope.into_ack()
    }

    /// Delete a member account.
    #[instrument(skip(self))]
    pub async fn delete_member(&self, member_id: &MemberId) -> Result<(), PlatformError> {
        let body = DeleteMemberRequest { id: member_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/user/deleteUser", &body).await?;
        envelope.into_ack()
    }

    /// Send a platform invitation to a phone number.
    #[instrument(skip(self))]
    pub async fn send_invitation(&self, number: &str) -> Result<(), PlatformError> {
        let body = InvitationRequest { number };
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/admin/adminInvitationToUser", &body)
            .await?;
        envelope.into_ack()
    }
}
