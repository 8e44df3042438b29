//! Clinical resource records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{RegistrationStatus, ResourceId};
use serde::{Deserialize, Serialize};

use super::author::AuthorRef;
use super::category::CategoryRef;
use super::tags;

/// A shared clinical resource (guideline, paper, attachment bundle).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_id: Option<AuthorRef>,
    /// Display label for the author, filled in for listing responses.
    #[serde(skip_deserializing)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Display label for the category, filled in for listing responses.
    #[serde(skip_deserializing)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub approval_status: Option<RegistrationStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource {
    /// Tags with stored JSON-array encodings flattened out.
    #[must_use]
    pub fn normalized_tags(&self) -> Vec<String> {
        tags::normalize(&self.tags)
    }

    /// Shape the record for a listing response: tags flattened, author
    /// and category references collapsed to display labels.
    #[must_use]
    pub fn into_listing(mut self) -> Self {
        self.tags = self.normalized_tags();
        self.author_name = self.author_id.as_ref().map(AuthorRef::display_name);
        self.category_name = self.category.as_ref().map(CategoryRef::display_name);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_bare_category_id() {
        let resource: Resource = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "title": "WHO analgesic ladder summary",
            "files": ["https://cdn.thegpdn.org/r1.pdf"],
            "category": "66c0ffee00000001",
            "approvalStatus": "pending"
        }))
        .unwrap();
        assert_eq!(resource.files.len(), 1);
        let category = resource.category.unwrap();
        assert_eq!(category.display_name(), "66c0ffee…");
    }

    #[test]
    fn listing_view_collapses_references() {
        let resource: Resource = serde_json::from_value(serde_json::json!({
            "_id": "r1",
            "title": "WHO analgesic ladder summary",
            "tags": ["[\"pain\"]"],
            "category": { "_id": "c1", "category": "Symptom control" },
            "authorId": "66b1f00d12345678"
        }))
        .unwrap();
        let shaped = serde_json::to_value(resource.into_listing()).unwrap();
        assert_eq!(shaped["tags"], serde_json::json!(["pain"]));
        assert_eq!(shaped["categoryName"], "Symptom control");
        assert_eq!(shaped["authorName"], "66b1f00d…");
    }
}
