//! Author references that arrive either as a bare id or an embedded
//! document, depending on whether the upstream query populated them.

use gpdn_core::types::MemberId;
use serde::{Deserialize, Serialize};

/// An embedded author document on a thread, resource, or blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    #[serde(rename = "_id")]
    pub id: MemberId,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

/// Either a populated author document or just its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Embedded(AuthorSummary),
    Id(MemberId),
}

impl AuthorRef {
    /// Human-readable author label. Falls back to a truncated id when
    /// the document was not populated or carries no name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Embedded(author) => author
                .full_name
                .clone()
                .unwrap_or_else(|| truncated_id(author.id.as_str())),
            Self::Id(id) => truncated_id(id.as_str()),
        }
    }
}

fn truncated_id(id: &str) -> String {
    let prefix: String = id.chars().take(8).collect();
    if prefix.len() < id.len() {
        format!("{prefix}…")
    } else {
        prefix
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_deserializes_to_id_variant() {
        let author: AuthorRef = serde_json::from_value(serde_json::json!("66b1f00d12345678")).unwrap();
        assert!(matches!(author, AuthorRef::Id(_)));
        assert_eq!(author.display_name(), "66b1f00d…");
    }

    #[test]
    fn embedded_document_uses_full_name() {
        let author: AuthorRef = serde_json::from_value(serde_json::json!({
            "_id": "66b1",
            "fullName": "Asha Menon"
        }))
        .unwrap();
        assert_eq!(author.display_name(), "Asha Menon");
    }

    #[test]
    fn embedded_document_without_name_falls_back_to_id() {
        let author: AuthorRef = serde_json::from_value(serde_json::json!({ "_id": "66b1" })).unwrap();
        assert_eq!(author.display_name(), "66b1");
    }
}
