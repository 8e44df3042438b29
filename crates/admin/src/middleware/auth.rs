//! Authentication and capability guards.
//!
//! Every management route extracts [`RequireAuth`]; capability-gated
//! routes additionally call [`require_capability`]. Responses
//! distinguish browser navigation (redirects) from `/api/` calls
//! (bare status codes) so both kinds of client get something usable.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use gpdn_core::types::Capability;
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor for routes that require a signed-in admin.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub CurrentAdmin);

/// Extractor for routes that behave differently when signed in but
/// never reject (the login page itself).
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<CurrentAdmin>);

/// Rejection for [`RequireAuth`].
#[derive(Debug)]
pub enum AuthRejection {
    RedirectToLogin,
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                axum::Json(serde_json::json!({
                    "success": false,
                    "message": "Authentication required"
                })),
            )
                .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OptionalAuth(admin) = OptionalAuth::from_request_parts(parts, state)
            .await
            .unwrap_or(OptionalAuth(None));

        admin.map(RequireAuth).ok_or_else(|| {
            if is_api_path(parts.uri.path()) {
                AuthRejection::Unauthorized
            } else {
                AuthRejection::RedirectToLogin
            }
        })
    }
}

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(session) = Session::from_request_parts(parts, state).await else {
            return Ok(Self(None));
        };

        // A record that no longer deserializes counts as signed out.
        let admin = session
            .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
            .await
            .ok()
            .flatten();

        Ok(Self(admin))
    }
}

/// Checks that the admin's role grants `capability`.
///
/// On failure, browser navigation is sent back to the dashboard and
/// `/api/` calls get a 403.
///
/// # Errors
///
/// Returns the ready-to-send rejection response when the capability is
/// not granted.
pub fn require_capability(
    admin: &CurrentAdmin,
    capability: &Capability,
    path: &str,
) -> Result<(), Response> {
    if admin.has_capability(capability) {
        return Ok(());
    }

    tracing::debug!(
        admin_id = %admin.id,
        capability = %capability,
        path,
        "capability denied"
    );

    if is_api_path(path) {
        Err((
            StatusCode::FORBIDDEN,
            axum::Json(serde_json::json!({
                "success": false,
                "message": "You do not have access to this section"
            })),
        )
            .into_response())
    } else {
        Err(Redirect::to("/").into_response())
    }
}

/// Stores the admin in the session after a successful login.
///
/// # Errors
///
/// Returns an error if the session record cannot be written.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Signs the admin out by destroying the whole session record.
///
/// # Errors
///
/// Returns an error if the session record cannot be deleted.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

fn is_api_path(path: &str) -> bool {
    path.starts_with("/api/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gpdn_core::types::{AdminId, Role, RoleId};

    use super::*;

    fn admin(capabilities: &[&str]) -> CurrentAdmin {
        CurrentAdmin {
            id: AdminId::from("a1"),
            full_name: "Asha Menon".to_owned(),
            email: "asha@thegpdn.org".to_owned(),
            phone_number: None,
            role: Some(Role {
                id: RoleId::from("r1"),
                name: "moderator".to_owned(),
                capabilities: capabilities.iter().map(|c| (*c).to_owned()).collect(),
            }),
        }
    }

    #[test]
    fn granted_capability_passes() {
        let admin = admin(&["thread management"]);
        assert!(require_capability(&admin, &Capability::ThreadManagement, "/threads").is_ok());
    }

    #[test]
    fn denied_capability_redirects_browser_navigation() {
        let admin = admin(&[]);
        let response = require_capability(&admin, &Capability::ThreadManagement, "/threads")
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[test]
    fn denied_capability_is_forbidden_for_api_calls() {
        let admin = admin(&[]);
        let response =
            require_capability(&admin, &Capability::ThreadManagement, "/api/threads").unwrap_err();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
