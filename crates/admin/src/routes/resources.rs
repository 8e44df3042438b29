//! Resource management routes, resource categories included.

use axum::extract::{Multipart, Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{Capability, CategoryId, ResourceId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::{Resource, ResourceCategory};
use crate::platform::EditResourceRequest;
use crate::state::AppState;

use super::{Ack, forward};

/// Body for flipping an approval flag.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub approval_status: bool,
}

/// Body for adding or renaming a category.
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

/// Lists all resources with moderation state.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Resource>>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    let resources = state
        .platform()
        .fetch_resources()
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(Resource::into_listing)
        .collect();
    Ok(Json(resources))
}

/// Adds a resource with its file attachments.
#[instrument(skip(state, admin, multipart))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .add_resource(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Resource added"))
}

/// Edits a resource's metadata without touching its files.
#[instrument(skip(state, admin, body))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<EditResourceRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .edit_resource(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Resource updated"))
}

/// Edits a resource with replacement file attachments.
#[instrument(skip(state, admin, multipart))]
pub async fn edit_with_files(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .edit_resource_multipart(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Resource updated"))
}

/// Approves or declines a resource.
#[instrument(skip(state, admin))]
pub async fn set_approval(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ResourceId>,
    Json(body): Json<ApprovalRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .set_resource_approval(&id, body.approval_status)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Resource approval updated"))
}

/// Deletes a resource.
#[instrument(skip(state, admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<ResourceId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .delete_resource(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Resource deleted"))
}

/// Lists resource categories with moderation state.
#[instrument(skip(state, admin))]
pub async fn categories(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<ResourceCategory>>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    let categories = state
        .platform()
        .fetch_resource_categories()
        .await
        .map_err(AppError::from)?;
    Ok(Json(categories))
}

/// Adds a resource category.
#[instrument(skip(state, admin, body))]
pub async fn add_category(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<CategoryRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    let category = body.category.trim();
    if category.is_empty() {
        return Err(AppError::BadRequest("category name is required".to_owned()).into());
    }
    state
        .platform()
        .add_resource_category(category)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Category added"))
}

/// Renames a resource category.
#[instrument(skip(state, admin, body))]
pub async fn edit_category(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<CategoryId>,
    Json(body): Json<CategoryRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .edit_resource_category(&id, body.category.trim())
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Category updated"))
}

/// Approves or declines a resource category.
#[instrument(skip(state, admin))]
pub async fn set_category_approval(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<CategoryId>,
    Json(body): Json<ApprovalRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .set_resource_category_approval(&id, body.approval_status)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Category approval updated"))
}

/// Deletes a resource category.
#[instrument(skip(state, admin))]
pub async fn remove_category(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<CategoryId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::ResourceManagement, uri.path())?;
    state
        .platform()
        .delete_resource_category(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Category deleted"))
}
