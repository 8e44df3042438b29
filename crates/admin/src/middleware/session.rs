//! Session cookie configuration.

use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};

use crate::session_store::FileSessionStore;

/// Cookie carrying the session id.
pub const SESSION_COOKIE_NAME: &str = "gpdn_admin_session";

/// Sessions lapse after a day without activity.
const SESSION_INACTIVITY: Duration = Duration::hours(24);

/// Builds the session layer over the file-backed store.
///
/// The cookie is `HttpOnly` and `SameSite=Strict`; `Secure` follows
/// whether the service itself terminates TLS.
pub fn create_session_layer(
    store: FileSessionStore,
    secure: bool,
) -> SessionManagerLayer<FileSessionStore> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(SESSION_INACTIVITY))
}
