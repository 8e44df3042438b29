//! Palliative directory routes. Units and their service categories
//! are gated by separate capabilities.

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{Capability, ServiceId, UnitId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::{PalliativeService, PalliativeUnit};
use crate::platform::{EditUnitRequest, NewUnitRequest};
use crate::state::AppState;

use super::Ack;

/// Body for publishing or withdrawing a unit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRequest {
    pub is_public: bool,
}

/// Body for adding or renaming a service category.
#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub service: String,
}

/// Lists all palliative-care units.
#[instrument(skip(state, admin))]
pub async fn units(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<PalliativeUnit>>> {
    require_capability(&admin, &Capability::PalliativeUnitManagement, uri.path())?;
    let units = state
        .platform()
        .fetch_units()
        .await
        .map_err(AppError::from)?;
    Ok(Json(units))
}

/// Adds a unit to the directory.
#[instrument(skip(state, admin, body))]
pub async fn add_unit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<NewUnitRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::PalliativeUnitManagement, uri.path())?;
    state
        .platform()
        .add_unit(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Unit added"))
}

/// Edits a unit's details.
#[instrument(skip(state, admin, body))]
pub async fn edit_unit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<EditUnitRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::PalliativeUnitManagement, uri.path())?;
    state
        .platform()
        .edit_unit(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Unit updated"))
}

/// Publishes a unit to the public directory, or withdraws it.
#[instrument(skip(state, admin))]
pub async fn set_unit_visibility(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<UnitId>,
    Json(body): Json<VisibilityRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::PalliativeUnitManagement, uri.path())?;
    state
        .platform()
        .set_unit_public(&id, body.is_public)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Unit visibility updated"))
}

/// Removes a unit from the directory.
#[instrument(skip(state, admin))]
pub async fn remove_unit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<UnitId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::PalliativeUnitManagement, uri.path())?;
    state
        .platform()
        .remove_unit(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Unit removed"))
}

/// Lists service categories.
#[instrument(skip(state, admin))]
pub async fn services(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<PalliativeService>>> {
    require_capability(&admin, &Capability::ServicesManagement, uri.path())?;
    let services = state
        .platform()
        .fetch_services()
        .await
        .map_err(AppError::from)?;
    Ok(Json(services))
}

/// Adds a service category.
#[instrument(skip(state, admin, body))]
pub async fn add_service(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<ServiceRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ServicesManagement, uri.path())?;
    let service = body.service.trim();
    if service.is_empty() {
        return Err(AppError::BadRequest("service name is required".to_owned()).into());
    }
    state
        .platform()
        .add_service(service)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Service added"))
}

/// Renames a service category.
#[instrument(skip(state, admin, body))]
pub async fn edit_service(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ServiceId>,
    Json(body): Json<ServiceRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ServicesManagement, uri.path())?;
    state
        .platform()
        .edit_service(&id, body.service.trim())
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Service updated"))
}

/// Deletes a service category.
#[instrument(skip(state, admin))]
pub async fn remove_service(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ServiceId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ServicesManagement, uri.path())?;
    state
        .platform()
        .delete_service(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Service deleted"))
}
