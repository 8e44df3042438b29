//! Status enums for platform entities.

use serde::{Deserialize, Serialize};

/// Member registration status.
///
/// Maps to the platform's `registrationStatus` field. The rejected state is
/// spelled `decline` (not `declined`) on the wire; that spelling is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Approved for platform access.
    Approved,
    /// Rejected by an admin.
    Decline,
}

impl RegistrationStatus {
    /// The wire token for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Decline => "decline",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::Decline).unwrap(),
            "\"decline\""
        );
        let status: RegistrationStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, RegistrationStatus::Approved);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(RegistrationStatus::default(), RegistrationStatus::Pending);
        assert_eq!(RegistrationStatus::Pending.as_str(), "pending");
    }
}
