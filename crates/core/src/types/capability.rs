//! Capabilities and roles.
//!
//! A capability is a string token granting permission to view or act on a
//! specific admin feature. A role is a named bundle of capabilities. The
//! platform stores capabilities as free-form strings; membership is exact
//! string equality, so the well-known tokens below are carried verbatim,
//! odd casing included.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::id::RoleId;

/// A permission token checked against a role's capability list.
///
/// The named variants cover the tokens the platform's role editor offers;
/// [`Capability::Other`] carries anything else unchanged so a new upstream
/// token degrades to plain string matching instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Forum thread moderation and thread categories.
    ThreadManagement,
    /// Resources, resource categories, and blogs.
    ResourceManagement,
    /// Palliative-care units.
    PalliativeUnitManagement,
    /// Admin accounts and roles.
    AdminsManagement,
    /// News and blog posts.
    NewsAndBlogsManagement,
    /// Member registrations and invitations.
    MembersManagement,
    /// Palliative-care services.
    ServicesManagement,
    /// Any capability token this build does not know about.
    Other(String),
}

impl Capability {
    /// The exact wire token for this capability.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ThreadManagement => "thread management",
            Self::ResourceManagement => "resource management",
            Self::PalliativeUnitManagement => "palliative unit management",
            Self::AdminsManagement => "admins management",
            // Upstream casing, kept verbatim.
            Self::NewsAndBlogsManagement => "News & blogs management",
            Self::MembersManagement => "members management",
            Self::ServicesManagement => "services management",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Capability {
    fn from(s: &str) -> Self {
        match s {
            "thread management" => Self::ThreadManagement,
            "resource management" => Self::ResourceManagement,
            "palliative unit management" => Self::PalliativeUnitManagement,
            "admins management" => Self::AdminsManagement,
            "News & blogs management" => Self::NewsAndBlogsManagement,
            "members management" => Self::MembersManagement,
            "services management" => Self::ServicesManagement,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Capability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A named bundle of capabilities, as returned by the platform API.
///
/// Wire shape: `{ "_id": "...", "role": "Moderator", "capabilities": [...] }`.
/// The capability list has no meaningful order; only membership is tested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    /// Role ID.
    #[serde(rename = "_id")]
    pub id: RoleId,
    /// Role name (the upstream field is literally called `role`).
    #[serde(rename = "role")]
    pub name: String,
    /// Capability tokens granted by this role.
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl Role {
    /// Whether this role grants `capability`.
    ///
    /// Exact string membership against the capability list. An empty list
    /// grants nothing.
    #[must_use]
    pub fn grants(&self, capability: &Capability) -> bool {
        self.capabilities.iter().any(|c| c == capability.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn moderator() -> Role {
        Role {
            id: RoleId::new("role-1"),
            name: "Moderator".to_owned(),
            capabilities: vec![
                "thread management".to_owned(),
                "resource management".to_owned(),
            ],
        }
    }

    #[test]
    fn test_grants_member_capability() {
        let role = moderator();
        assert!(role.grants(&Capability::ThreadManagement));
        assert!(role.grants(&Capability::ResourceManagement));
    }

    #[test]
    fn test_denies_absent_capability() {
        let role = moderator();
        assert!(!role.grants(&Capability::AdminsManagement));
        assert!(!role.grants(&Capability::Other("billing".to_owned())));
    }

    #[test]
    fn test_empty_capability_list_grants_nothing() {
        let role = Role {
            id: RoleId::new("role-2"),
            name: "Observer".to_owned(),
            capabilities: vec![],
        };
        assert!(!role.grants(&Capability::ThreadManagement));
    }

    #[test]
    fn test_unknown_token_matches_exactly() {
        let role = Role {
            id: RoleId::new("role-3"),
            name: "Custom".to_owned(),
            capabilities: vec!["billing".to_owned()],
        };
        assert!(role.grants(&Capability::Other("billing".to_owned())));
        assert!(!role.grants(&Capability::Other("Billing".to_owned())));
    }

    #[test]
    fn test_capability_wire_tokens() {
        assert_eq!(Capability::AdminsManagement.as_str(), "admins management");
        assert_eq!(
            Capability::NewsAndBlogsManagement.as_str(),
            "News & blogs management"
        );
        assert_eq!(
            Capability::from("thread management"),
            Capability::ThreadManagement
        );
        assert_eq!(
            Capability::from("something new"),
            Capability::Other("something new".to_owned())
        );
    }

    #[test]
    fn test_role_deserializes_wire_shape() {
        let json = r#"{
            "_id": "665f1c2ab1d2c3d4e5f60718",
            "role": "Super Admin",
            "capabilities": ["admins management", "thread management"]
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.name, "Super Admin");
        assert!(role.grants(&Capability::AdminsManagement));
    }

    #[test]
    fn test_role_missing_capabilities_defaults_empty() {
        let json = r#"{"_id": "r", "role": "Bare"}"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert!(role.capabilities.is_empty());
        assert!(!role.grants(&Capability::ThreadManagement));
    }

    #[test]
    fn test_capability_serde_roundtrip() {
        let json = serde_json::to_string(&Capability::NewsAndBlogsManagement).unwrap();
        assert_eq!(json, "\"News & blogs management\"");
        let back: Capability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Capability::NewsAndBlogsManagement);
    }
}
