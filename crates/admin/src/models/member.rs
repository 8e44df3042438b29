//! Platform member (healthcare professional) records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{MemberId, RegistrationStatus};
use serde::{Deserialize, Serialize};

/// A registered (or still-pending) member of the network.
///
/// The profile fields are all optional upstream; registration only
/// guarantees name, email, and phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: MemberId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub country_of_practice: Option<String>,
    #[serde(default)]
    pub medical_qualification: Option<String>,
    #[serde(default)]
    pub year_of_graduation: Option<String>,
    #[serde(default)]
    pub has_formal_training_in_palliative_care: Option<bool>,
    #[serde(default)]
    pub medical_registration_authority: Option<String>,
    #[serde(default)]
    pub medical_registration_number: Option<String>,
    #[serde(default)]
    pub affiliated_palliative_associations: Option<String>,
    #[serde(default)]
    pub special_interests_in_palliative_care: Option<String>,
    #[serde(default)]
    pub registration_status: Option<RegistrationStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "_id": "m1",
            "fullName": "Dr. Ngozi Adeyemi",
            "email": "ngozi@example.org",
            "registrationStatus": "pending"
        }))
        .unwrap();
        assert_eq!(member.registration_status, Some(RegistrationStatus::Pending));
        assert!(member.country_of_practice.is_none());
    }
}
