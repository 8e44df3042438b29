//! Discussion thread records.

use chrono::{DateTime, Utc};
use gpdn_core::types::{RegistrationStatus, ThreadId};
use serde::{Deserialize, Serialize};

use super::author::AuthorRef;
use super::tags;

/// A forum thread awaiting or past moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    #[serde(rename = "_id")]
    pub id: ThreadId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<AuthorRef>,
    /// Display label for the author, filled in for listing responses.
    #[serde(skip_deserializing)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub up_vote: u64,
    #[serde(default)]
    pub down_vote: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub approval_status: Option<RegistrationStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Thread {
    /// Tags with stored JSON-array encodings flattened out.
    #[must_use]
    pub fn normalized_tags(&self) -> Vec<String> {
        tags::normalize(&self.tags)
    }

    /// Shape the record for a listing response: tags flattened, the
    /// author reference collapsed to a display label.
    #[must_use]
    pub fn into_listing(mut self) -> Self {
        self.tags = self.normalized_tags();
        self.author_name = self.author_id.as_ref().map(AuthorRef::display_name);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_populated_author() {
        let thread: Thread = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "title": "Opioid titration in home care",
            "authorId": { "_id": "m1", "fullName": "Dr. Ngozi Adeyemi" },
            "tags": ["[\"pain\",\"home care\"]"],
            "upVote": 4,
            "approvalStatus": "approved"
        }))
        .unwrap();
        assert_eq!(thread.up_vote, 4);
        assert_eq!(thread.normalized_tags(), vec!["pain", "home care"]);
        let author = thread.author_id.unwrap();
        assert_eq!(author.display_name(), "Dr. Ngozi Adeyemi");
    }

    #[test]
    fn listing_view_serializes_shaped_fields() {
        let thread: Thread = serde_json::from_value(serde_json::json!({
            "_id": "t1",
            "title": "Opioid titration in home care",
            "authorId": { "_id": "m1", "fullName": "Dr. Ngozi Adeyemi" },
            "tags": ["[\"pain\",\"home care\"]", "pain"]
        }))
        .unwrap();
        let shaped = serde_json::to_value(thread.into_listing()).unwrap();
        assert_eq!(shaped["tags"], serde_json::json!(["pain", "home care"]));
        assert_eq!(shaped["authorName"], "Dr. Ngozi Adeyemi");
    }
}
