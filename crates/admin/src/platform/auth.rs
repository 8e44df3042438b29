//! Authentication against the platform.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::models::CurrentAdmin;

use super::{Envelope, PlatformClient, PlatformError};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// The login endpoint wraps the admin record one level deeper than the
/// generic envelope (`{status, data: {data: admin}}`). The quirk is
/// contained here rather than leaking into [`Envelope`].
#[derive(Debug, Deserialize)]
struct LoginData {
    data: CurrentAdmin,
}

impl PlatformClient {
    /// Authenticate an admin with email and password.
    ///
    /// On success, returns the admin+role payload exactly as the platform
    /// reports it; this is what gets stored in the session.
    ///
    /// # Errors
    ///
    /// `PlatformError::Rejected` with the upstream message on bad
    /// credentials, `PlatformError::Http` on transport failure.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<CurrentAdmin, PlatformError> {
        let body = LoginRequest {
            email,
            password: password.expose_secret(),
        };
        let envelope: Envelope<LoginData> = self.post_json("/api/admin/adminLogin", &body).await?;
        Ok(envelope.into_data()?.data)
    }
}
