//! The platform's JSON response envelope.
//!
//! Two conventions appear across the API, apparently by accident rather
//! than versioning:
//!
//! - `{ "success": bool, "data"?: T, "message"?: string }`
//! - `{ "status": number, "data"?: T, "message"?: string }`
//!
//! Both are accepted here: a response is successful when `success` is
//! `true`, or when `success` is absent and `status` is in the 2xx range.

use serde::Deserialize;

use super::PlatformError;

/// Fallback shown when a failure envelope carries no message.
const GENERIC_FAILURE: &str = "Request failed";

/// A platform API response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: Option<bool>,
    pub status: Option<u16>,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Whether the envelope indicates success, under either convention.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match (self.success, self.status) {
            (Some(ok), _) => ok,
            (None, Some(status)) => (200..300).contains(&status),
            (None, None) => false,
        }
    }

    /// The failure message, with a generic fallback.
    fn failure_message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }

    /// Extract the payload, requiring it to be present.
    ///
    /// # Errors
    ///
    /// `PlatformError::Rejected` on a failure envelope,
    /// `PlatformError::MissingData` on success without `data`.
    pub fn into_data(self) -> Result<T, PlatformError> {
        if self.is_success() {
            self.data.ok_or(PlatformError::MissingData)
        } else {
            Err(PlatformError::Rejected {
                message: self.failure_message(),
            })
        }
    }

    /// Discard the payload, keeping only the success/failure outcome.
    ///
    /// # Errors
    ///
    /// `PlatformError::Rejected` on a failure envelope.
    pub fn into_ack(self) -> Result<(), PlatformError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(PlatformError::Rejected {
                message: self.failure_message(),
            })
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Extract a list payload, treating a successful response without
    /// `data` as an empty list (the dashboard's `data.data || []`).
    ///
    /// # Errors
    ///
    /// `PlatformError::Rejected` on a failure envelope.
    pub fn into_list(self) -> Result<Vec<T>, PlatformError> {
        if self.is_success() {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(PlatformError::Rejected {
                message: self.failure_message(),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_boolean_convention() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true, "data": ["a"]}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.into_list().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn test_status_code_convention() {
        let env: Envelope<String> =
            serde_json::from_str(r#"{"status": 200, "data": "ok"}"#).unwrap();
        assert!(env.is_success());

        let env: Envelope<String> =
            serde_json::from_str(r#"{"status": 404, "message": "No such thread"}"#).unwrap();
        assert!(!env.is_success());
        match env.into_data() {
            Err(PlatformError::Rejected { message }) => assert_eq!(message, "No such thread"),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_failure_beats_status() {
        // If both fields are present, the boolean wins.
        let env: Envelope<String> =
            serde_json::from_str(r#"{"success": false, "status": 200}"#).unwrap();
        assert!(!env.is_success());
    }

    #[test]
    fn test_neither_convention_is_failure() {
        let env: Envelope<String> = serde_json::from_str(r#"{"data": "orphan"}"#).unwrap();
        assert!(!env.is_success());
    }

    #[test]
    fn test_failure_message_fallback() {
        let env: Envelope<String> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        match env.into_ack() {
            Err(PlatformError::Rejected { message }) => assert_eq!(message, GENERIC_FAILURE),
            other => panic!("expected rejection, got {other:?}"),
        }

        // An empty message also falls back.
        let env: Envelope<String> =
            serde_json::from_str(r#"{"success": false, "message": ""}"#).unwrap();
        match env.into_ack() {
            Err(PlatformError::Rejected { message }) => assert_eq!(message, GENERIC_FAILURE),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_type_needs_no_default() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Payload {
            name: String,
        }

        let env: Envelope<Payload> =
            serde_json::from_str(r#"{"success": true, "data": {"name": "asha"}}"#).unwrap();
        assert_eq!(
            env.into_data().unwrap(),
            Payload {
                name: "asha".to_string()
            }
        );
    }

    #[test]
    fn test_success_without_data() {
        let env: Envelope<String> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(env.into_data(), Err(PlatformError::MissingData)));

        let env: Envelope<Vec<String>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_list().unwrap().is_empty());

        let env: Envelope<String> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_ack().is_ok());
    }
}
