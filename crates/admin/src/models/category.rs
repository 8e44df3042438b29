//! Thread and resource category records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{CategoryId, RegistrationStatus};
use serde::{Deserialize, Serialize};

/// A thread category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub category: String,
}

/// A resource category, which additionally goes through moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategory {
    #[serde(rename = "_id")]
    pub id: CategoryId,
    pub category: String,
    #[serde(default)]
    pub approval_status: Option<RegistrationStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Either a populated category document or just its id, depending on
/// whether the upstream query populated the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Embedded(Category),
    Id(CategoryId),
}

impl CategoryRef {
    /// Category label, falling back to a truncated id when only the
    /// reference is present.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Embedded(category) => category.category.clone(),
            Self::Id(id) => {
                let prefix: String = id.as_str().chars().take(8).collect();
                if prefix.len() < id.as_str().len() {
                    format!("{prefix}…")
                } else {
                    prefix
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn embedded_category_uses_label() {
        let category: CategoryRef = serde_json::from_value(serde_json::json!({
            "_id": "c1",
            "category": "Symptom control"
        }))
        .unwrap();
        assert_eq!(category.display_name(), "Symptom control");
    }

    #[test]
    fn bare_id_is_truncated() {
        let category: CategoryRef =
            serde_json::from_value(serde_json::json!("66c0ffee00000001")).unwrap();
        assert_eq!(category.display_name(), "66c0ffee…");
    }

    #[test]
    fn short_id_is_kept_whole() {
        let category: CategoryRef = serde_json::from_value(serde_json::json!("c1")).unwrap();
        assert_eq!(category.display_name(), "c1");
    }
}
