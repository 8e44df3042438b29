//! Admin account and role management routes.

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{AdminId, Capability, Role, RoleId};
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::AdminAccount;
use crate::platform::{CreateAdminRequest, CreateRoleRequest, EditAdminRequest, EditRoleRequest};
use crate::state::AppState;

use super::Ack;

/// Lists all admin accounts.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<AdminAccount>>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    let admins = state
        .platform()
        .fetch_admins()
        .await
        .map_err(AppError::from)?
        .into_iter()
        .map(AdminAccount::into_listing)
        .collect();
    Ok(Json(admins))
}

/// Creates an admin account. Credentials are forwarded to the
/// platform, which owns password storage.
#[instrument(skip(state, admin, body), fields(email = %body.email))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<CreateAdminRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    state
        .platform()
        .create_admin(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Admin created"))
}

/// Edits an admin account; password only changes when supplied.
#[instrument(skip(state, admin, body))]
pub async fn edit(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<EditAdminRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    state
        .platform()
        .edit_admin(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Admin updated"))
}

/// Deletes an admin account. Deleting yourself is refused; sign-out is
/// the way to leave.
#[instrument(skip(state, admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<AdminId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    if admin.id == id {
        return Err(
            AppError::BadRequest("you cannot delete your own account".to_owned()).into(),
        );
    }
    state
        .platform()
        .delete_admin(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Admin deleted"))
}

/// Lists all roles with their capability sets.
#[instrument(skip(state, admin))]
pub async fn roles(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Role>>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    let roles = state
        .platform()
        .fetch_roles()
        .await
        .map_err(AppError::from)?;
    Ok(Json(roles))
}

/// Creates a role.
#[instrument(skip(state, admin, body), fields(role = %body.role))]
pub async fn create_role(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<CreateRoleRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    if body.role.trim().is_empty() {
        return Err(AppError::BadRequest("role name is required".to_owned()).into());
    }
    state
        .platform()
        .create_role(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Role created"))
}

/// Edits a role's name and capability set. Capability changes take
/// effect for signed-in admins on their next login.
#[instrument(skip(state, admin, body))]
pub async fn edit_role(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<EditRoleRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    state
        .platform()
        .edit_role(&body)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Role updated"))
}

/// Deletes a role.
#[instrument(skip(state, admin))]
pub async fn remove_role(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<RoleId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::AdminsManagement, uri.path())?;
    state
        .platform()
        .delete_role(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Role deleted"))
}
