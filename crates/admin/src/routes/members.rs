//! Member management routes.

use axum::extract::{Multipart, Path, State};
use axum::http::Uri;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::{Capability, MemberId, RegistrationStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, require_capability};
use crate::models::Member;
use crate::state::AppState;

use super::{Ack, forward};

/// Body for approving or declining a registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub action_status: RegistrationStatus,
}

/// Body for sending an SMS invitation.
#[derive(Debug, Deserialize)]
pub struct InviteRequest {
    pub number: String,
}

/// Lists all members, pending registrations included.
#[instrument(skip(state, admin))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
) -> HandlerResult<Json<Vec<Member>>> {
    require_capability(&admin, &Capability::MembersManagement, uri.path())?;
    let members = state
        .platform()
        .fetch_members()
        .await
        .map_err(AppError::from)?;
    Ok(Json(members))
}

/// Registers a member on their behalf; profile image rides along as a
/// `file` part.
#[instrument(skip(state, admin, multipart))]
pub async fn register(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    multipart: Multipart,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::MembersManagement, uri.path())?;
    let form = forward::into_platform_form(multipart).await?;
    state
        .platform()
        .register_member(form)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Member registered"))
}

/// Approves or declines a pending registration.
#[instrument(skip(state, admin))]
pub async fn set_status(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<MemberId>,
    Json(body): Json<StatusRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::MembersManagement, uri.path())?;
    state
        .platform()
        .set_member_status(&id, body.action_status)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Registration status updated"))
}

/// Deletes a member account.
#[instrument(skip(state, admin))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Path(id): Path<MemberId>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::MembersManagement, uri.path())?;
    state
        .platform()
        .delete_member(&id)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Member deleted"))
}

/// Sends a platform invitation to a phone number.
#[instrument(skip(state, admin, body))]
pub async fn invite(
    State(state): State<AppState>,
    RequireAuth(admin): RequireAuth,
    uri: Uri,
    Json(body): Json<InviteRequest>,
) -> HandlerResult<Json<Ack>> {
    require_capability(&admin, &Capability::MembersManagement, uri.path())?;
    let number = body.number.trim();
    if number.is_empty() {
        return Err(AppError::BadRequest("phone number is required".to_owned()).into());
    }
    state
        .platform()
        .send_invitation(number)
        .await
        .map_err(AppError::from)?;
    Ok(Ack::ok("Invitation sent"))
}
