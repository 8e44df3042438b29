//! Admin account records as listed on the admins management surface.

use chrono::{DateTime, Utc};
use gpdn_core::types::{AdminId, Role};
use serde::{Deserialize, Serialize};

/// An admin account, with its role either populated or absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(rename = "_id")]
    pub id: AdminId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    /// Role label for listing responses, with an "unassigned" fallback.
    #[serde(skip_deserializing)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AdminAccount {
    /// The role name to display, or a placeholder when no role is set.
    #[must_use]
    pub fn display_role(&self) -> &str {
        self.role.as_ref().map_or("unassigned", |role| &role.name)
    }

    /// Shape the record for a listing response.
    #[must_use]
    pub fn into_listing(mut self) -> Self {
        self.role_name = Some(self.display_role().to_owned());
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn role_label_falls_back_when_unassigned() {
        let account: AdminAccount = serde_json::from_value(serde_json::json!({
            "_id": "a1",
            "fullName": "Asha Menon",
            "email": "asha@thegpdn.org"
        }))
        .unwrap();
        assert_eq!(account.display_role(), "unassigned");
        let shaped = serde_json::to_value(account.into_listing()).unwrap();
        assert_eq!(shaped["roleName"], "unassigned");
    }
}
