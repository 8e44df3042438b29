//! Admin account and role operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gpdn_core::{AdminId, Role, RoleId};

use crate::models::AdminAccount;

use super::{Envelope, PlatformClient, PlatformError};

/// Payload for creating an admin account.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    /// Role ID (the upstream field is `role`).
    pub role: RoleId,
}

/// Payload for editing an admin account.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAdminRequest {
    #[serde(rename = "_id")]
    pub id: AdminId,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: RoleId,
}

/// Payload for creating a role.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    pub role: String,
    pub capabilities: Vec<String>,
}

/// Payload for editing a role.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditRoleRequest {
    #[serde(rename = "_id")]
    pub id: RoleId,
    pub role: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAdminRequest<'a> {
    admin_id: &'a AdminId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRoleRequest<'a> {
    role_id: &'a RoleId,
}

impl PlatformClient {
    /// Fetch all admin accounts.
    #[instrument(skip(self))]
    pub async fn fetch_admins(&self) -> Result<Vec<AdminAccount>, PlatformError> {
        let envelope: Envelope<Vec<AdminAccount>> = self.get("/api/admin/fetchAdmin").await?;
        envelope.into_list()
    }

    /// Create an admin account.
    #[instrument(skip(self, request))]
    pub async fn create_admin(&self, request: &CreateAdminRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/createAdmin", request).await?;
        envelope.into_ack()
    }

    /// Edit an admin account.
    #[instrument(skip(self, request))]
    pub async fn edit_admin(&self, request: &EditAdminRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.patch_json("/api/admin/editAdmin", request).await?;
        envelope.into_ack()
    }

    /// Delete an admin account.
    #[instrument(skip(self))]
    pub async fn delete_admin(&self, admin_id: &AdminId) -> Result<(), PlatformError> {
        let body = DeleteAdminRequest { admin_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/deleteAdmin", &body).await?;
        envelope.into_ack()
    }

    /// Fetch all roles.
    #[instrument(skip(self))]
    pub async fn fetch_roles(&self) -> Result<Vec<Role>, PlatformError> {
        let envelope: Envelope<Vec<Role>> = self.get("/api/admin/fetchRole").await?;
        envelope.into_list()
    }

    /// Create a role.
    #[instrument(skip(self, request))]
    pub async fn create_role(&self, request: &CreateRoleRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/addRole", request).await?;
        envelope.into_ack()
    }

    /// Edit a role.
    #[instrument(skip(self, request))]
    pub async fn edit_role(&self, request: &EditRoleRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> =
            self.patch_json("/api/admin/editRole", request).await?;
        envelope.into_ack()
    }

    /// Delete a role.
    #[instrument(skip(self))]
    pub async fn delete_role(&self, role_id: &RoleId) -> Result<(), PlatformError> {
        let body = DeleteRoleRequest { role_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/deleteRole", &body).await?;
        envelope.into_ack()
    }
}
