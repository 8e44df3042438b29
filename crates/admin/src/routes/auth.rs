//! Sign-in, sign-out, and session introspection.

use axum::extract::State;
use axum::{Json, response::Result as HandlerResult};
use gpdn_core::types::Email;
use secrecy::SecretString;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::{RequireAuth, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::state::AppState;

use super::Ack;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

/// Authenticates against the platform and starts a session.
///
/// Bad credentials surface as a 400 carrying the platform's own
/// message, which the dashboard shows to the operator.
#[instrument(skip(state, session, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> HandlerResult<Json<CurrentAdmin>> {
    let email =
        Email::parse(&body.email).map_err(|err| AppError::BadRequest(err.to_string()))?;

    let admin = state
        .platform()
        .login(email.as_str(), &body.password)
        .await
        .map_err(AppError::from)?;

    // Fresh session id on privilege change.
    session
        .cycle_id()
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;
    set_current_admin(&session, &admin)
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;

    tracing::info!(admin_id = %admin.id, "admin signed in");
    Ok(Json(admin))
}

/// Destroys the session record and clears the cookie.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> HandlerResult<Json<Ack>> {
    clear_current_admin(&session)
        .await
        .map_err(|err| AppError::Internal(err.to_string()))?;
    Ok(Ack::ok("Signed out"))
}

/// Returns the signed-in admin, role and capabilities included.
#[instrument(skip(admin))]
pub async fn me(RequireAuth(admin): RequireAuth) -> Json<CurrentAdmin> {
    Json(admin)
}
