//! The signed-in admin record held in the session.

use gpdn_core::types::{AdminId, Capability, Role};
use serde::{Deserialize, Serialize};

/// Keys under which values are stored in the session record.
pub mod session_keys {
    /// The [`CurrentAdmin`](super::CurrentAdmin) for an authenticated session.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

/// The admin account returned by a successful login, persisted in the
/// session for the lifetime of the sign-in.
///
/// The embedded role carries the capability strings that gate every
/// management surface. An admin without a role (or whose role has no
/// capabilities) is authenticated but can reach nothing beyond the
/// dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAdmin {
    #[serde(rename = "_id")]
    pub id: AdminId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl CurrentAdmin {
    /// Whether this admin's role grants the given capability.
    ///
    /// Absent role means no capabilities at all.
    #[must_use]
    pub fn has_capability(&self, capability: &Capability) -> bool {
        self.role
            .as_ref()
            .is_some_and(|role| role.grants(capability))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gpdn_core::types::RoleId;

    fn admin_with_capabilities(capabilities: &[&str]) -> CurrentAdmin {
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
    fn has_capability_checks_role_membership() {
        let admin = admin_with_capabilities(&["thread management", "members management"]);
        assert!(admin.has_capability(&Capability::ThreadManagement));
        assert!(admin.has_capability(&Capability::MembersManagement));
        assert!(!admin.has_capability(&Capability::AdminsManagement));
    }

    #[test]
    fn admin_without_role_has_no_capabilities() {
        let mut admin = admin_with_capabilities(&["thread management"]);
        admin.role = None;
        assert!(!admin.has_capability(&Capability::ThreadManagement));
    }

    #[test]
    fn deserializes_login_payload() {
        let json = serde_json::json!({
            "_id": "66b1",
            "fullName": "Asha Menon",
            "email": "asha@thegpdn.org",
            "phoneNumber": "+91 98400 00000",
            "role": {
                "_id": "r9",
                "role": "super admin",
                "capabilities": ["admins management", "members management"]
            }
        });
        let admin: CurrentAdmin = serde_json::from_value(json).unwrap();
        assert_eq!(admin.full_name, "Asha Menon");
        assert!(admin.has_capability(&Capability::AdminsManagement));
    }
}
