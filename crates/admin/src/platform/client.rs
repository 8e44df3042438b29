//! HTTP client for the platform API.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Envelope, PlatformError};

/// Request timeout for upstream calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the GPDN platform REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
/// There is no retry or backoff here: a failed call surfaces immediately
/// and the operator retries from the dashboard.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    inner: Arc<PlatformClientInner>,
}

#[derive(Debug)]
struct PlatformClientInner {
    http: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a new client against `base_url` (no trailing slash).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            inner: Arc::new(PlatformClientInner {
                http,
                base_url: base_url.into(),
            }),
        }
    }

    /// The configured API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Connectivity probe for readiness checks. Any HTTP response
    /// counts; only a transport failure is an error.
    ///
    /// # Errors
    ///
    /// `PlatformError::Http` when the platform API is unreachable.
    pub async fn ping(&self) -> Result<(), PlatformError> {
        self.inner.http.get(&self.inner.base_url).send().await?;
        Ok(())
    }

    /// GET `path` and decode the response envelope.
    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<T>, PlatformError> {
        let response = self.inner.http.get(self.url(path)).send().await?;
        Ok(response.json().await?)
    }

    /// POST a JSON `body` to `path` and decode the response envelope.
    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, PlatformError> {
        let response = self.inner.http.post(self.url(path)).json(body).send().await?;
        Ok(response.json().await?)
    }

    /// PATCH a JSON `body` to `path` and decode the response envelope.
    pub(super) async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, PlatformError> {
        let response = self
            .inner
            .http
            .patch(self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// POST a multipart `form` to `path` and decode the response envelope.
    pub(super) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope<T>, PlatformError> {
        let response = self
            .inner
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// PATCH a multipart `form` to `path` and decode the response envelope.
    pub(super) async fn patch_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope<T>, PlatformError> {
        let response = self
            .inner
            .http
            .patch(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = PlatformClient::new("https://api.thegpdn.org");
        assert_eq!(
            client.url("/api/thread/FetchThread"),
            "https://api.thegpdn.org/api/thread/FetchThread"
        );
        assert_eq!(client.base_url(), "https://api.thegpdn.org");
    }
}
