pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_admin, require_capability, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
