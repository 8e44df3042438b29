//! Palliative-care unit and service operations.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use gpdn_core::{ServiceId, UnitId};

use crate::models::{PalliativeService, PalliativeUnit};

use super::{Envelope, PlatformClient, PlatformError};

/// Payload for creating a palliative-care unit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnitRequest {
    pub name: String,
    pub state: String,
    pub country: String,
    pub service_id: ServiceId,
    pub contact_details: String,
}

/// Payload for editing a palliative-care unit.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUnitRequest {
    #[serde(rename = "_id")]
    pub id: UnitId,
    pub name: String,
    pub state: String,
    pub country: String,
    pub service_id: ServiceId,
    pub contact_details: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UnitApprovalRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a UnitId,
    is_public: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveUnitRequest<'a> {
    unit_id: &'a UnitId,
}

#[derive(Debug, Serialize)]
struct NewServiceRequest<'a> {
    service: &'a str,
}

#[derive(Debug, Serialize)]
struct EditServiceRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a ServiceId,
    service: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteServiceRequest<'a> {
    #[serde(rename = "_id")]
    id: &'a ServiceId,
}

impl PlatformClient {
    /// Fetch all palliative-care units.
    #[instrument(skip(self))]
    pub async fn fetch_units(&self) -> Result<Vec<PalliativeUnit>, PlatformError> {
        let envelope: Envelope<Vec<PalliativeUnit>> =
            self.get("/api/palliative/fetchPalliativeUnit").await?;
        envelope.into_list()
    }

    /// Create a palliative-care unit.
    #[instrument(skip(self, request))]
    pub async fn add_unit(&self, request: &NewUnitRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/palliative/addPalliativeUnit", request)
            .await?;
        envelope.into_ack()
    }

    /// Edit a palliative-care unit.
    #[instrument(skip(self, request))]
    pub async fn edit_unit(&self, request: &EditUnitRequest) -> Result<(), PlatformError> {
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/palliative/editPalliativeUnit", request)
            .await?;
        envelope.into_ack()
    }

    /// Approve or withdraw a unit for public display.
    #[instrument(skip(self))]
    pub async fn set_unit_public(
        &self,
        id: &UnitId,
        is_public: bool,
    ) -> Result<(), PlatformError> {
        let body = UnitApprovalRequest { id, is_public };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/admin/approveUnitForPublic", &body)
            .await?;
        envelope.into_ack()
    }

    /// Remove a palliative-care unit.
    #[instrument(skip(self))]
    pub async fn remove_unit(&self, unit_id: &UnitId) -> Result<(), PlatformError> {
        let body = RemoveUnitRequest { unit_id };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/admin/removePalliative", &body).await?;
        envelope.into_ack()
    }

    /// Fetch all palliative-care services.
    #[instrument(skip(self))]
    pub async fn fetch_services(&self) -> Result<Vec<PalliativeService>, PlatformError> {
        let envelope: Envelope<Vec<PalliativeService>> =
            self.get("/api/palliative/fetchServices").await?;
        envelope.into_list()
    }

    /// Create a palliative-care service.
    #[instrument(skip(self))]
    pub async fn add_service(&self, service: &str) -> Result<(), PlatformError> {
        let body = NewServiceRequest { service };
        let envelope: Envelope<serde_json::Value> =
            self.post_json("/api/palliative/addService", &body).await?;
        envelope.into_ack()
    }

    /// Rename a palliative-care service.
    #[instrument(skip(self))]
    pub async fn edit_service(&self, id: &ServiceId, service: &str) -> Result<(), PlatformError> {
        let body = EditServiceRequest { id, service };
        let envelope: Envelope<serde_json::Value> = self
            .patch_json("/api/palliative/editService", &body)
            .await?;
        envelope.into_ack()
    }

    /// Delete a palliative-care service.
    #[instrument(skip(self))]
    pub async fn delete_service(&self, id: &ServiceId) -> Result<(), PlatformError> {
        let body = DeleteServiceRequest { id };
        let envelope: Envelope<serde_json::Value> = self
            .post_json("/api/palliative/deleteService", &body)
            .await?;
        envelope.into_ack()
    }
}
