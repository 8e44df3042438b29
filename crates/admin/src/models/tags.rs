//! Tag normalization.
//!
//! Stored tag arrays are inconsistent upstream: some entries are plain
//! strings, others are whole JSON-encoded arrays (`"[\"a\",\"b\"]"`)
//! saved verbatim by older clients. Normalization flattens those,
//! strips stray bracket and quote characters, and deduplicates while
//! preserving first-seen order.

/// Flatten and clean a raw tag list.
#[must_use]
pub fn normalize(raw: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for entry in raw {
        for tag in split_entry(entry) {
            let cleaned = clean(&tag);
            if !cleaned.is_empty() && !seen.contains(&cleaned) {
                seen.push(cleaned);
            }
        }
    }
    seen
}

/// A stored entry may itself be a JSON array of tags.
fn split_entry(entry: &str) -> Vec<String> {
    if let Ok(nested) = serde_json::from_str::<Vec<String>>(entry) {
        return nested;
    }
    vec![entry.to_owned()]
}

fn clean(tag: &str) -> String {
    tag.chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect::<String>()
        .trim()
        .to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn plain_tags_pass_through() {
        assert_eq!(
            normalize(&owned(&["pain", "home care"])),
            vec!["pain", "home care"]
        );
    }

    #[test]
    fn json_encoded_entries_are_flattened() {
        assert_eq!(
            normalize(&owned(&["[\"pain\",\"ethics\"]", "home care"])),
            vec!["pain", "ethics", "home care"]
        );
    }

    #[test]
    fn stray_brackets_and_quotes_are_stripped() {
        assert_eq!(normalize(&owned(&["[pain", "\"ethics]\""])), vec!["pain", "ethics"]);
    }

    #[test]
    fn duplicates_and_empties_are_dropped() {
        assert_eq!(
            normalize(&owned(&["pain", "pain", "", "  ", "[\"pain\"]"])),
            vec!["pain"]
        );
    }
}
