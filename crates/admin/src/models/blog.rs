//! News and blog post records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{BlogId, RegistrationStatus};
use serde::{Deserialize, Serialize};

use super::author::AuthorRef;
use super::category::CategoryRef;
use super::tags;

/// A news or blog post published through the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: BlogId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<AuthorRef>,
    /// Display label for the author, filled in for listing responses.
    #[serde(skip_deserializing)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Display label for the category, filled in for listing responses.
    #[serde(skip_deserializing)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub approval_status: Option<RegistrationStatus>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blog {
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
    fn listing_view_flattens_tags() {
        let blog: Blog = serde_json::from_value(serde_json::json!({
            "_id": "b1",
            "title": "World Hospice Day round-up",
            "tags": ["[\"hospice\",\"events\"]", "events"],
            "category": "66c0ffee00000001"
        }))
        .unwrap();
        let shaped = serde_json::to_value(blog.into_listing()).unwrap();
        assert_eq!(shaped["tags"], serde_json::json!(["hospice", "events"]));
        assert_eq!(shaped["categoryName"], "66c0ffee…");
    }
}
